//! Rooms, doors, and step resolution for tesser room graphs.
//!
//! A [`World`] is an arena of axis-aligned [`Room`]s joined by [`Door`]s.
//! Doors are rigid transforms, so nothing forces the room graph to embed in
//! ordinary space: walking around a loop may rotate you, and two routes to
//! "the same" cell may end in different rooms.
//!
//! # Moving
//!
//! - [`World::unit_step`] moves one cell, crossing a door if needed.
//! - [`World::step`] resolves a whole move batch, trying every order of its
//!   distinct directions, and reports
//!   [`Orientation::Ambiguous`](tesser_core::Orientation::Ambiguous) when
//!   the orders disagree.
//! - [`StepResolver`] is the configurable form of [`World::step`].
//!
//! # Tiles
//!
//! [`World::get`] and [`World::set`] read and write the tile under an
//! orientation, failing with [`TileError`](tesser_core::TileError) for
//! sentinels and out-of-room positions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod door;
pub mod error;
pub mod resolver;
pub mod room;
pub mod step;
pub mod world;

#[cfg(test)]
pub(crate) mod compliance;

pub use batch::MoveBatch;
pub use config::{ConfigError, ResolveConfig};
pub use door::Door;
pub use error::{StepError, WorldError};
pub use resolver::StepResolver;
pub use room::Room;
pub use world::World;
