//! World invariant test helpers.
//!
//! These functions check the structural and behavioural invariants every
//! world built through the public API must satisfy. Reused by the unit
//! test modules of `world`, `step` and `resolver`.

use crate::world::World;
use indexmap::IndexSet;
use tesser_core::{Direction, Orientation, RoomId, Tile};

/// Assert that every room's grid holds exactly `width * height * depth` tiles.
pub fn assert_grid_sizes(world: &World) {
    for (id, room) in world.iter() {
        let (w, h, d) = room.dims();
        let expected = w as usize * h as usize * d as usize;
        assert_eq!(
            room.tiles().len(),
            expected,
            "room {id}: {} tiles for dims {w}x{h}x{d}",
            room.tiles().len()
        );
    }
}

/// Assert that every door has its inverse on the target room.
pub fn assert_doors_paired(world: &World) {
    if let Err(e) = world.check_door_pairs() {
        panic!("door pairing violated: {e}");
    }
}

/// Every in-bounds cell of every room, facing `XPlus`.
pub fn all_cells(world: &World) -> Vec<Orientation> {
    let mut cells = Vec::new();
    for (id, room) in world.iter() {
        let (w, h, d) = room.dims();
        for z in 0..d as i32 {
            for y in 0..h as i32 {
                for x in 0..w as i32 {
                    cells.push(Orientation::at(id, x, y, z, Direction::XPlus));
                }
            }
        }
    }
    cells
}

/// Assert that in-bounds orientations settle to themselves and that every
/// cell index is reached exactly once.
pub fn assert_cells_settle(world: &World) {
    let mut seen: IndexSet<(RoomId, usize)> = IndexSet::new();
    for o in all_cells(world) {
        assert_eq!(world.settle(o), o, "{o} did not settle to itself");
        let loc = o.as_located().copied().expect("cells are located");
        let index = world
            .room(loc.room)
            .and_then(|room| room.index_of(&loc.transform))
            .expect("cell has an index");
        assert!(seen.insert((loc.room, index)), "{o} shares index {index}");
    }
    let total: usize = world.rooms().iter().map(|r| r.cell_count()).sum();
    assert_eq!(seen.len(), total);
}

/// Assert that a single step that lands somewhere definite can be undone
/// by stepping the opposite way.
///
/// Only meaningful for worlds whose doors never disagree.
pub fn assert_steps_reversible(world: &World) {
    for cell in all_cells(world) {
        for rotation in Direction::HORIZONTAL {
            let start = cell.spin(rotation);
            for dir in Direction::ALL {
                let moved = world.unit_step(start, dir);
                if moved.is_located() {
                    assert_eq!(
                        world.unit_step(moved, dir.opposite()),
                        start,
                        "stepping {dir} from {start} to {moved} is not reversible"
                    );
                }
            }
        }
    }
}

/// Assert that tiles written through an orientation read back unchanged.
pub fn assert_tiles_round_trip(world: &World) {
    let mut scratch = world.clone();
    for (i, cell) in all_cells(world).into_iter().enumerate() {
        let tile = Tile(i as i32 + 1);
        scratch.set(cell, tile).expect("in-bounds set");
        assert_eq!(scratch.get(cell), Ok(tile));
    }
}

/// All orderings of `moves`, duplicates included.
pub fn permutations(moves: &[Direction]) -> Vec<Vec<Direction>> {
    if moves.is_empty() {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for i in 0..moves.len() {
        let mut rest = moves.to_vec();
        let first = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            out.push(tail);
        }
    }
    out
}

/// Walk `moves` one unit step at a time in the given order.
pub fn walk_in_order(world: &World, start: Orientation, moves: &[Direction]) -> Orientation {
    moves
        .iter()
        .fold(start, |at, &dir| world.unit_step(at, dir))
}

/// Assert that every ordering of `moves` that stays in the world ends
/// where the batch resolver says.
///
/// Only meaningful for worlds that embed in ordinary space.
pub fn assert_orders_agree(world: &World, start: Orientation, moves: &[Direction]) {
    let batch = world.step(start, moves);
    assert!(!batch.is_ambiguous(), "{moves:?} from {start} is ambiguous");
    for order in permutations(moves) {
        let walked = walk_in_order(world, start, &order);
        if walked.is_located() {
            assert_eq!(walked, batch, "order {order:?} from {start} disagrees");
        }
    }
}

/// Run the structural checks plus reversibility on a world.
pub fn run_full_compliance(world: &World) {
    assert_grid_sizes(world);
    assert_doors_paired(world);
    assert_cells_settle(world);
    assert_steps_reversible(world);
    assert_tiles_round_trip(world);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesser_core::Direction::*;
    use tesser_core::Transform;

    #[test]
    fn permutations_cover_every_order() {
        let perms = permutations(&[XPlus, YPlus, ZPlus]);
        assert_eq!(perms.len(), 6);
        let unique: IndexSet<_> = perms.into_iter().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn walk_in_order_matches_unit_steps() {
        let mut world = World::new();
        let room = world.add_room(3, 3, 1).unwrap();
        let start = world.orientation(room, 0, 0, 0, XPlus);
        assert_eq!(
            walk_in_order(&world, start, &[XPlus, YPlus, XPlus]),
            Orientation::located(room, Transform::new(2, 1, 0, XPlus))
        );
    }

    #[test]
    fn open_room_passes_compliance() {
        let mut world = World::new();
        world.add_room(3, 2, 2).unwrap();
        world.add_room(0, 4, 1).unwrap();
        run_full_compliance(&world);
    }

    #[test]
    fn open_room_orders_agree() {
        let mut world = World::new();
        let room = world.add_room(4, 4, 2).unwrap();
        let start = world.orientation(room, 1, 1, 0, YPlus);
        assert_orders_agree(&world, start, &[XPlus, YPlus, ZPlus, XPlus]);
        assert_orders_agree(&world, start, &[XMinus, YMinus, XMinus]);
    }
}
