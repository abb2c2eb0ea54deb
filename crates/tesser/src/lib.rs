//! Tesser: non-Euclidean room graphs with order-aware movement.
//!
//! A world is a set of box-shaped rooms whose walls may hold doors. A door
//! can lead anywhere, including back into its own room, and can turn the
//! mover on the way through. Because of that, a batch of moves such as
//! "one east, one north" may end in different places depending on the
//! order it is walked in; the resolver reports that as
//! [`Orientation::Ambiguous`](types::Orientation::Ambiguous) instead of
//! picking one.
//!
//! This is the facade crate that re-exports the public API from all tesser
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tesser::prelude::*;
//!
//! let mut world = World::new();
//! let hall = world.add_room(3, 1, 1).unwrap();
//! let side = world.add_room(1, 2, 1).unwrap();
//! // Walking off the east end of the hall enters `side` from below,
//! // now heading north.
//! world.add_door(hall, Orientation::at(side, 0, -3, 0, Direction::YPlus)).unwrap();
//!
//! let start = world.orientation(hall, 1, 0, 0, Direction::XPlus);
//! let end = world.step(start, &[Direction::XPlus, Direction::XPlus, Direction::XPlus]);
//! assert_eq!(end, Orientation::at(side, 0, 1, 0, Direction::YPlus));
//! world.set(end, Tile(1)).unwrap();
//!
//! let text = tesser::format::to_string(&world);
//! assert_eq!(tesser::format::from_str(&text).unwrap(), world);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tesser-core` | Ids, directions, transforms, orientations |
//! | [`space`] | `tesser-space` | Rooms, doors, worlds, and the step resolver |
//! | [`format`] | `tesser-format` | Plain-text load and save |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`tesser-core`).
///
/// [`types::Direction`], [`types::Transform`] and [`types::Orientation`]
/// with their algebra, plus [`types::RoomId`] and [`types::Tile`].
pub use tesser_core as types;

/// Rooms, doors, and movement (`tesser-space`).
///
/// [`space::World`] owns the rooms; [`space::StepResolver`] resolves move
/// batches with a configurable [`space::ResolveConfig`].
pub use tesser_space as space;

/// Plain-text persistence (`tesser-format`).
///
/// [`format::load`] and [`format::save`] read and write a whole
/// [`space::World`].
pub use tesser_format as format;

/// Common imports for typical tesser usage.
///
/// ```rust
/// use tesser::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tesser_core::{Direction, Located, Orientation, RoomId, Tile, Transform};

    // Errors
    pub use tesser_core::TileError;
    pub use tesser_format::FormatError;
    pub use tesser_space::{ConfigError, StepError, WorldError};

    // World and movement
    pub use tesser_space::{Door, MoveBatch, ResolveConfig, Room, StepResolver, World};

    // Persistence
    pub use tesser_format::LoadConfig;
}
