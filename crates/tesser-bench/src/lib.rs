//! Benchmark profiles and utilities for tesser.
//!
//! - [`grid_profile`]: a Euclidean tiling of square rooms
//! - [`twisted_profile`]: the same tiling with every other horizontal door
//!   turned a quarter, so some batches come out ambiguous
//! - [`random_starts`] and [`random_batches`]: deterministic inputs via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tesser_core::{Direction, Orientation, RoomId};
use tesser_space::{World, WorldError};

const MUL_A: u64 = 6364136223846793005;
const MUL_B: u64 = 1442695040888963407;

/// Build a `cols × rows` tiling of `size × size × 1` rooms.
///
/// Room `r * cols + c` sits at column `c`, row `r`; +x and +y walls open
/// onto the neighbouring rooms.
pub fn grid_profile(cols: u32, rows: u32, size: u32) -> Result<World, WorldError> {
    let mut world = World::new();
    for _ in 0..cols * rows {
        world.add_room(size, size, 1)?;
    }
    let s = size as i32;
    for r in 0..rows {
        for c in 0..cols {
            let here = RoomId(r * cols + c);
            if c + 1 < cols {
                let east = RoomId(here.0 + 1);
                world.add_door(here, Orientation::at(east, -s, 0, 0, Direction::XPlus))?;
            }
            if r + 1 < rows {
                let north = RoomId(here.0 + cols);
                world.add_door(here, Orientation::at(north, 0, -s, 0, Direction::XPlus))?;
            }
        }
    }
    Ok(world)
}

/// Like [`grid_profile`], but every east door on an odd row enters the
/// neighbour through its south wall, facing +y.
pub fn twisted_profile(cols: u32, rows: u32, size: u32) -> Result<World, WorldError> {
    let mut world = World::new();
    for _ in 0..cols * rows {
        world.add_room(size, size, 1)?;
    }
    let s = size as i32;
    for r in 0..rows {
        for c in 0..cols {
            let here = RoomId(r * cols + c);
            if c + 1 < cols {
                let east = RoomId(here.0 + 1);
                let door = if r % 2 == 1 {
                    Orientation::at(east, 0, -s, 0, Direction::YPlus)
                } else {
                    Orientation::at(east, -s, 0, 0, Direction::XPlus)
                };
                world.add_door(here, door)?;
            }
            if r + 1 < rows {
                let north = RoomId(here.0 + cols);
                world.add_door(here, Orientation::at(north, 0, -s, 0, Direction::XPlus))?;
            }
        }
    }
    Ok(world)
}

/// `n` deterministic in-bounds orientations spread across `world`.
pub fn random_starts(world: &World, n: usize, seed: u64) -> Vec<Orientation> {
    let rooms = world.len() as u64;
    if rooms == 0 {
        return Vec::new();
    }
    (0..n as u64)
        .filter_map(|i| {
            let h = seed.wrapping_mul(MUL_A).wrapping_add(i.wrapping_mul(MUL_B));
            let id = RoomId((h % rooms) as u32);
            let room = world.room(id)?;
            let (w, hgt, d) = room.dims();
            if room.is_empty() {
                return None;
            }
            let x = ((h >> 8) % w as u64) as i32;
            let y = ((h >> 24) % hgt as u64) as i32;
            let z = ((h >> 40) % d as u64) as i32;
            let rot = Direction::HORIZONTAL[((h >> 56) % 4) as usize];
            Some(world.orientation(id, x, y, z, rot))
        })
        .collect()
}

/// `n` deterministic horizontal move batches of length `len`.
pub fn random_batches(n: usize, len: usize, seed: u64) -> Vec<Vec<Direction>> {
    (0..n as u64)
        .map(|i| {
            (0..len as u64)
                .map(|j| {
                    let h = seed
                        .wrapping_add(i.wrapping_mul(MUL_A))
                        .wrapping_add(j.wrapping_mul(MUL_B));
                    Direction::HORIZONTAL[((h >> 33) % 4) as usize]
                })
                .collect()
        })
        .collect()
}
