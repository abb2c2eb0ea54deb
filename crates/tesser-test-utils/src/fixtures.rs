//! Named fixture worlds.
//!
//! Euclidean fixtures ([`corridor`], [`room_grid`]) embed in ordinary space,
//! so every order of a move batch that stays inside ends on the same cell.
//! The others are deliberately non-Euclidean.

use crate::TestWorldBuilder;
use tesser_core::Direction::*;
use tesser_core::{Orientation, RoomId};
use tesser_space::World;

/// One open room and its id.
pub fn single_room(width: u32, height: u32, depth: u32) -> (World, RoomId) {
    let world = TestWorldBuilder::new().room(width, height, depth).build();
    (world, RoomId(0))
}

/// `rooms` rooms of `length × 1 × 1` joined end to end along +x.
pub fn corridor(rooms: u32, length: u32) -> World {
    let mut b = TestWorldBuilder::new();
    for _ in 0..rooms {
        b = b.room(length, 1, 1);
    }
    for i in 1..rooms {
        b = b.door(i - 1, i, (-(length as i32), 0, 0), XPlus);
    }
    b.build()
}

/// A `cols × rows` tiling of `size × size × 1` rooms.
///
/// Room `r * cols + c` sits at column `c`, row `r`; its +x wall opens onto
/// the next column and its +y wall onto the next row.
pub fn room_grid(cols: u32, rows: u32, size: u32) -> World {
    let mut b = TestWorldBuilder::new();
    for _ in 0..cols * rows {
        b = b.room(size, size, 1);
    }
    let s = size as i32;
    for r in 0..rows {
        for c in 0..cols {
            let here = r * cols + c;
            if c + 1 < cols {
                b = b.door(here, here + 1, (-s, 0, 0), XPlus);
            }
            if r + 1 < rows {
                b = b.door(here, here + cols, (0, -s, 0), XPlus);
            }
        }
    }
    b.build()
}

/// A `2×1` room whose +x wall opens onto the bottom of a `1×2` room, turning
/// the mover a quarter to face +y.
pub fn quarter_turn() -> (World, RoomId, RoomId) {
    let world = TestWorldBuilder::new()
        .room(2, 1, 1)
        .room(1, 2, 1)
        .door(0, 1, (0, -2, 0), YPlus)
        .build();
    (world, RoomId(0), RoomId(1))
}

/// A `3×1` corridor whose +x end turns the mover around into the corridor
/// again, facing -x.
pub fn u_turn() -> (World, RoomId) {
    let world = TestWorldBuilder::new()
        .room(3, 1, 1)
        .door(0, 0, (5, 0, 0), XMinus)
        .build();
    (world, RoomId(0))
}

/// Two `1×1×1` rooms stacked with a floor hatch: leaving the lower room
/// upwards enters the upper one.
pub fn stacked() -> (World, RoomId, RoomId) {
    let world = TestWorldBuilder::new()
        .room(1, 1, 1)
        .room(1, 1, 1)
        .door(0, 1, (0, 0, -1), XPlus)
        .build();
    (world, RoomId(0), RoomId(1))
}

/// A `1×1` room whose +x wall holds two doors to different rooms. Returns
/// the world and an orientation in the first room.
pub fn conflicting_doors() -> (World, Orientation) {
    let world = TestWorldBuilder::new()
        .room(1, 1, 1)
        .room(1, 1, 1)
        .room(1, 1, 1)
        .door(0, 1, (-1, 0, 0), XPlus)
        .door(0, 2, (-1, 0, 0), XPlus)
        .build();
    let start = world.orientation(RoomId(0), 0, 0, 0, XPlus);
    (world, start)
}

/// Five `1×1` rooms. From room 0, +x enters room 1 and +y enters room 2;
/// the diagonal corner is room 3 when reached through room 1 and room 4
/// when reached through room 2. Every door is consistent, but `[+x, +y]`
/// depends on order.
pub fn forked() -> (World, Orientation) {
    let world = TestWorldBuilder::new()
        .room(1, 1, 1)
        .room(1, 1, 1)
        .room(1, 1, 1)
        .room(1, 1, 1)
        .room(1, 1, 1)
        .door(0, 1, (-1, 0, 0), XPlus)
        .door(0, 2, (0, -1, 0), XPlus)
        .door(1, 3, (0, -1, 0), XPlus)
        .door(2, 4, (-1, 0, 0), XPlus)
        .build();
    let start = world.orientation(RoomId(0), 0, 0, 0, XPlus);
    (world, start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_fully_paired() {
        let worlds = [
            single_room(2, 3, 4).0,
            corridor(4, 3),
            room_grid(3, 2, 2),
            quarter_turn().0,
            u_turn().0,
            stacked().0,
            conflicting_doors().0,
            forked().0,
        ];
        for world in &worlds {
            assert_eq!(world.check_door_pairs(), Ok(()));
        }
    }

    #[test]
    fn room_grid_layout() {
        let world = room_grid(3, 2, 2);
        assert_eq!(world.len(), 6);
        // Room 4 is column 1, row 1: doors back to 3 and 1, forward to 5.
        assert_eq!(world.room(RoomId(4)).unwrap().doors().len(), 3);
    }

    #[test]
    fn u_turn_reverses_the_mover() {
        let (world, r) = u_turn();
        let end = world.orientation(r, 2, 0, 0, XPlus);
        assert_eq!(world.unit_step(end, XPlus), Orientation::at(r, 2, 0, 0, XMinus));
    }
}
