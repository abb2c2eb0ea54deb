//! Strongly-typed identifiers: [`RoomId`] and the [`Tile`] code.

use std::fmt;

/// Identifies a room within a world.
///
/// Rooms are pushed into the world arena in order and never removed, so
/// `RoomId(n)` is the n-th room ever added. Doors and orientations refer to
/// rooms through this index instead of holding a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u32);

impl RoomId {
    /// Arena slot for this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Content of a single grid cell.
///
/// The code carries no meaning to the engine; hosts decide what
/// `Tile(3)` is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(pub i32);

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Tile {
    fn from(v: i32) -> Self {
        Self(v)
    }
}
