//! Axis-aligned rooms: a dense tile grid plus outgoing doors.

use crate::door::Door;
use crate::error::WorldError;
use smallvec::SmallVec;
use tesser_core::{Tile, Transform};

/// A rectangular prism of tiles in its own local frame.
///
/// Cell `(x, y, z)` with `0 <= x < width`, `0 <= y < height`,
/// `0 <= z < depth` lives at index `x + y * width + z * width * height`.
/// A room with any zero dimension is legal and has no cells.
///
/// # Examples
///
/// ```
/// use tesser_space::Room;
/// use tesser_core::{Direction, Tile, Transform};
///
/// let mut room = Room::new(3, 3, 3).unwrap(); // a rubik's cube
/// assert_eq!(room.cell_count(), 27);
///
/// let centre = Transform::new(1, 1, 1, Direction::XPlus);
/// room.set_tile(&centre, Tile(9));
/// assert_eq!(room.tile(&centre), Some(Tile(9)));
/// assert_eq!(room.tiles()[13], Tile(9));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    width: u32,
    height: u32,
    depth: u32,
    tiles: Vec<Tile>,
    doors: SmallVec<[Door; 4]>,
}

impl Room {
    /// Maximum size of one axis: coordinates use `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a room filled with `Tile(0)` and no doors.
    ///
    /// Returns `Err(WorldError::DimensionTooLarge)` if an axis exceeds
    /// [`MAX_DIM`](Self::MAX_DIM) or the cell count overflows `usize`.
    pub fn new(width: u32, height: u32, depth: u32) -> Result<Self, WorldError> {
        let cells = Self::checked_cell_count(width, height, depth)?;
        Ok(Self {
            width,
            height,
            depth,
            tiles: vec![Tile::default(); cells],
            doors: SmallVec::new(),
        })
    }

    /// Create a room from an existing tile grid in index order.
    ///
    /// Returns `Err(WorldError::TileCountMismatch)` unless
    /// `tiles.len() == width * height * depth`.
    pub fn from_tiles(
        width: u32,
        height: u32,
        depth: u32,
        tiles: Vec<Tile>,
    ) -> Result<Self, WorldError> {
        let cells = Self::checked_cell_count(width, height, depth)?;
        if tiles.len() != cells {
            return Err(WorldError::TileCountMismatch {
                expected: cells,
                found: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            depth,
            tiles,
            doors: SmallVec::new(),
        })
    }

    fn checked_cell_count(width: u32, height: u32, depth: u32) -> Result<usize, WorldError> {
        for (name, value) in [("width", width), ("height", height), ("depth", depth)] {
            if value > Self::MAX_DIM {
                return Err(WorldError::DimensionTooLarge {
                    name,
                    value: value as u64,
                    max: Self::MAX_DIM as u64,
                });
            }
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(depth as usize))
            .ok_or(WorldError::DimensionTooLarge {
                name: "cells",
                value: (width as u64)
                    .saturating_mul(height as u64)
                    .saturating_mul(depth as u64),
                max: usize::MAX as u64,
            })
    }

    /// Extent along `x`.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Extent along `y`.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Extent along `z`.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// `(width, height, depth)`.
    pub fn dims(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.depth)
    }

    /// Number of cells; always equal to `tiles().len()`.
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if the room has no cells.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `t`'s position is a cell of this room.
    pub fn contains(&self, t: &Transform) -> bool {
        self.index_of(t).is_some()
    }

    /// Flat index of `t`'s position, or `None` outside the room.
    pub fn index_of(&self, t: &Transform) -> Option<usize> {
        let axis = |v: i32, dim: u32| -> Option<usize> {
            if v >= 0 && (v as u32) < dim {
                Some(v as usize)
            } else {
                None
            }
        };
        let x = axis(t.x, self.width)?;
        let y = axis(t.y, self.height)?;
        let z = axis(t.z, self.depth)?;
        let w = self.width as usize;
        let h = self.height as usize;
        Some(x + y * w + z * w * h)
    }

    /// Tile at `t`'s position.
    pub fn tile(&self, t: &Transform) -> Option<Tile> {
        self.index_of(t).map(|i| self.tiles[i])
    }

    /// Overwrite the tile at `t`'s position. Returns `false` outside the room.
    pub fn set_tile(&mut self, t: &Transform, tile: Tile) -> bool {
        match self.index_of(t) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// The tile grid in index order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Mutable view of the tile grid. The length cannot change.
    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Outgoing doors in registration order.
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub(crate) fn push_door(&mut self, door: Door) {
        self.doors.push(door);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesser_core::Direction::XPlus;
    use tesser_core::RoomId;

    fn at(x: i32, y: i32, z: i32) -> Transform {
        Transform::new(x, y, z, XPlus)
    }

    #[test]
    fn grid_length_matches_dimensions() {
        let room = Room::new(4, 3, 2).unwrap();
        assert_eq!(room.cell_count(), 24);
        assert_eq!(room.dims(), (4, 3, 2));
        assert!(room.doors().is_empty());
        assert!(room.tiles().iter().all(|&t| t == Tile(0)));
    }

    #[test]
    fn index_is_x_major_then_y_then_z() {
        let room = Room::new(4, 3, 2).unwrap();
        assert_eq!(room.index_of(&at(0, 0, 0)), Some(0));
        assert_eq!(room.index_of(&at(1, 0, 0)), Some(1));
        assert_eq!(room.index_of(&at(0, 1, 0)), Some(4));
        assert_eq!(room.index_of(&at(0, 0, 1)), Some(12));
        assert_eq!(room.index_of(&at(3, 2, 1)), Some(23));
    }

    #[test]
    fn positions_outside_are_rejected_on_every_axis() {
        let room = Room::new(2, 2, 2).unwrap();
        for t in [
            at(-1, 0, 0),
            at(2, 0, 0),
            at(0, -1, 0),
            at(0, 2, 0),
            at(0, 0, -1),
            at(0, 0, 2),
        ] {
            assert!(!room.contains(&t), "{t} should be outside");
            assert_eq!(room.tile(&t), None);
        }
    }

    #[test]
    fn set_tile_outside_leaves_grid_untouched() {
        let mut room = Room::new(2, 1, 1).unwrap();
        assert!(!room.set_tile(&at(5, 0, 0), Tile(1)));
        assert_eq!(room.tiles(), &[Tile(0), Tile(0)]);
        assert!(room.set_tile(&at(1, 0, 0), Tile(1)));
        assert_eq!(room.tiles(), &[Tile(0), Tile(1)]);
    }

    #[test]
    fn zero_dimension_room_has_no_cells() {
        let room = Room::new(0, 5, 5).unwrap();
        assert!(room.is_empty());
        assert!(!room.contains(&at(0, 0, 0)));
    }

    #[test]
    fn from_tiles_checks_length() {
        assert!(Room::from_tiles(2, 2, 1, vec![Tile(1); 4]).is_ok());
        assert_eq!(
            Room::from_tiles(2, 2, 1, vec![Tile(1); 3]),
            Err(WorldError::TileCountMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Room::new(big, 1, 1),
            Err(WorldError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Room::new(1, 1, big),
            Err(WorldError::DimensionTooLarge { name: "depth", .. })
        ));
    }

    #[test]
    fn doors_keep_registration_order() {
        let mut room = Room::new(1, 1, 1).unwrap();
        let a = Door::new(RoomId(1), at(-1, 0, 0));
        let b = Door::new(RoomId(2), at(0, -1, 0));
        room.push_door(a);
        room.push_door(b);
        assert_eq!(room.doors(), &[a, b]);
    }
}
