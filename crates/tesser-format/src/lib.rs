//! Plain-text persistence for tesser worlds.
//!
//! A world is stored as a room count followed by one block per room. A
//! block lists the room's doors, then its dimensions, then its tiles layer
//! by layer.
//!
//! # Format
//!
//! ```text
//! <room count>
//!
//! x, y, z, rotation, target     (zero or more door lines)
//! width, height, depth
//! t, t, ..., t                  (height rows of width tiles per layer)
//! <blank line after each layer>
//! ```
//!
//! Fields are decimal integers separated by commas. Door lines have five
//! fields and the dimension line three, which is how the two are told
//! apart. Blank lines only separate and are skipped on load. Rotations use
//! the [`Direction`](tesser_core::Direction) codes `0..=5`.
//!
//! # Examples
//!
//! ```
//! use tesser_core::{Direction::*, Orientation, Tile};
//! use tesser_space::World;
//!
//! let mut world = World::new();
//! let a = world.add_room(2, 1, 1).unwrap();
//! let b = world.add_room(1, 1, 1).unwrap();
//! world.add_door(a, Orientation::at(b, -2, 0, 0, XPlus)).unwrap();
//! world.set(world.orientation(b, 0, 0, 0, XPlus), Tile(7)).unwrap();
//!
//! let text = tesser_format::to_string(&world);
//! assert!(text.starts_with("2\n"));
//! assert_eq!(tesser_format::from_str(&text).unwrap(), world);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod reader;
pub mod writer;

pub use config::{LoadConfig, LoadConfigError};
pub use error::FormatError;
pub use reader::{from_str, load, load_with};
pub use writer::{save, to_string};
