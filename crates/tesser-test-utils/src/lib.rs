//! Test utilities and fixture worlds for tesser development.
//!
//! Provides a [`TestWorldBuilder`] for describing a world in a few lines
//! and, in [`fixtures`], the named worlds the workspace tests share.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use tesser_core::{Direction, Orientation, RoomId, Tile};
use tesser_space::World;

/// Builder for constructing test worlds.
///
/// Rooms are numbered in the order they are added, starting at 0. Every
/// call panics on invalid input, which is what a test wants.
///
/// ```
/// use tesser_core::Direction::*;
/// use tesser_test_utils::TestWorldBuilder;
///
/// let world = TestWorldBuilder::new()
///     .room(2, 1, 1)
///     .room(2, 1, 1)
///     .door(0, 1, (-2, 0, 0), XPlus)
///     .build();
/// assert_eq!(world.len(), 2);
/// ```
#[derive(Default)]
pub struct TestWorldBuilder {
    world: World,
}

impl TestWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank room.
    pub fn room(mut self, width: u32, height: u32, depth: u32) -> Self {
        self.world
            .add_room(width, height, depth)
            .expect("fixture room dimensions are valid");
        self
    }

    /// Add a paired door from room `from` to room `to`.
    pub fn door(mut self, from: u32, to: u32, offset: (i32, i32, i32), rotation: Direction) -> Self {
        let (x, y, z) = offset;
        self.world
            .add_door(RoomId(from), Orientation::at(RoomId(to), x, y, z, rotation))
            .expect("fixture door rooms exist");
        self
    }

    /// Number every cell of room `room` with consecutive tiles from `first`,
    /// in index order.
    pub fn numbered(mut self, room: u32, first: i32) -> Self {
        let room = self
            .world
            .room_mut(RoomId(room))
            .expect("fixture room exists");
        for (i, tile) in room.tiles_mut().iter_mut().enumerate() {
            *tile = Tile(first + i as i32);
        }
        self
    }

    pub fn build(self) -> World {
        self.world
    }
}
