//! Core types for the tesser room-graph engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types that every other crate in the workspace shares: room and
//! tile identifiers, the six [`Direction`]s and their composition rule, the
//! rigid [`Transform`] algebra, the sentinel-carrying [`Orientation`], and
//! the error types raised at the tile-access boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod id;
pub mod orientation;
pub mod transform;

pub use direction::Direction;
pub use error::{InvalidDirection, TileError};
pub use id::{RoomId, Tile};
pub use orientation::{Located, Orientation};
pub use transform::Transform;
