//! The room arena and door registration.

use crate::door::Door;
use crate::error::WorldError;
use crate::room::Room;
use tesser_core::{Direction, Orientation, RoomId, Tile, TileError, Transform};

/// An ordered arena of rooms.
///
/// Rooms are appended and never removed, so a [`RoomId`] stays valid for
/// the life of the world. Doors refer to their target by id, which keeps
/// the (cyclic) room graph free of ownership cycles.
///
/// # Examples
///
/// ```
/// use tesser_core::{Direction::*, Orientation};
/// use tesser_space::World;
///
/// let mut world = World::new();
/// let room = world.add_room(2, 2, 1).unwrap();
/// let start = world.orientation(room, 0, 0, 0, XPlus);
///
/// assert_eq!(world.step(start, &[XPlus]), Orientation::at(room, 1, 0, 0, XPlus));
/// assert!(world.step(start, &[XPlus, XPlus]).is_out_of_bounds());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct World {
    rooms: Vec<Room>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank room and return its id.
    pub fn add_room(&mut self, width: u32, height: u32, depth: u32) -> Result<RoomId, WorldError> {
        let room = Room::new(width, height, depth)?;
        self.push_room(room)
    }

    /// Append an existing room and return its id.
    ///
    /// Doors already stored on `room` are kept as they are; their targets
    /// are not checked.
    pub fn push_room(&mut self, room: Room) -> Result<RoomId, WorldError> {
        let id = next_id(self.rooms.len())?;
        self.rooms.push(room);
        Ok(id)
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the world has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Look up a room.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// Look up a room for tile edits.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.index())
    }

    /// All rooms in id order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Iterate `(id, room)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        (0..).map(RoomId).zip(&self.rooms)
    }

    fn require(&self, id: RoomId) -> Result<&Room, WorldError> {
        self.room(id).ok_or(WorldError::UnknownRoom {
            room: id,
            len: self.rooms.len(),
        })
    }

    /// A settled orientation: `OutOfBounds` unless `(x, y, z)` is a cell of
    /// `room`.
    pub fn orientation(
        &self,
        room: RoomId,
        x: i32,
        y: i32,
        z: i32,
        rotation: Direction,
    ) -> Orientation {
        self.settle(Orientation::at(room, x, y, z, rotation))
    }

    /// Replace a `Located` value that lies outside its room, or names a
    /// room this world does not have, with `OutOfBounds`.
    pub fn settle(&self, o: Orientation) -> Orientation {
        match o {
            Orientation::Located(loc) if self.contains(loc.room, &loc.transform) => o,
            Orientation::Located(_) => Orientation::OutOfBounds,
            sentinel => sentinel,
        }
    }

    pub(crate) fn contains(&self, room: RoomId, t: &Transform) -> bool {
        self.room(room).is_some_and(|r| r.contains(t))
    }

    /// Connect `from` to the point `to` and register the inverse door on
    /// `to`'s room.
    ///
    /// `to` is the transform, in the neighbouring room's frame, that `from`'s
    /// frame maps onto. A room may be connected to itself; both halves are
    /// then stored on that room.
    pub fn add_door(&mut self, from: RoomId, to: Orientation) -> Result<(), WorldError> {
        let door = Door::try_from(to)?;
        self.require(from)?;
        self.require(door.target)?;
        let back = door.paired(from)?;
        self.rooms[from.index()].push_door(door);
        self.rooms[door.target.index()].push_door(back);
        log::debug!(
            "door added: room {from} -> room {} via {}, inverse {}",
            door.target,
            door.transform,
            back.transform
        );
        Ok(())
    }

    /// Register a single door on `from` without its inverse.
    ///
    /// For rebuilding a world whose door lists are already complete, such
    /// as one being loaded from disk. [`check_door_pairs`](Self::check_door_pairs)
    /// reports any door left without a partner.
    pub fn attach_door(&mut self, from: RoomId, door: Door) -> Result<(), WorldError> {
        self.require(from)?;
        self.require(door.target)?;
        door.paired(from)?;
        self.rooms[from.index()].push_door(door);
        Ok(())
    }

    /// Verify that every door has its inverse registered on its target.
    pub fn check_door_pairs(&self) -> Result<(), WorldError> {
        for (id, room) in self.iter() {
            for (i, door) in room.doors().iter().enumerate() {
                let expected = door.inverse(id);
                let paired = self.room(door.target).zip(expected).is_some_and(
                    |(target, expected)| target.doors().contains(&expected),
                );
                if !paired {
                    return Err(WorldError::UnpairedDoor {
                        room: id,
                        door: i,
                        target: door.target,
                        transform: door.transform,
                    });
                }
            }
        }
        Ok(())
    }

    /// Read the tile under `at`.
    pub fn get(&self, at: Orientation) -> Result<Tile, TileError> {
        match at {
            Orientation::Ambiguous => Err(TileError::Ambiguous),
            Orientation::OutOfBounds => Err(TileError::OutOfBounds),
            Orientation::Located(loc) => self
                .room(loc.room)
                .and_then(|room| room.tile(&loc.transform))
                .ok_or(TileError::OutOfBounds),
        }
    }

    /// Overwrite the tile under `at`. A failed call changes nothing.
    pub fn set(&mut self, at: Orientation, tile: Tile) -> Result<(), TileError> {
        match at {
            Orientation::Ambiguous => Err(TileError::Ambiguous),
            Orientation::OutOfBounds => Err(TileError::OutOfBounds),
            Orientation::Located(loc) => {
                let written = self
                    .room_mut(loc.room)
                    .is_some_and(|room| room.set_tile(&loc.transform, tile));
                if written {
                    Ok(())
                } else {
                    Err(TileError::OutOfBounds)
                }
            }
        }
    }
}

/// Id of the room appended after `len` existing rooms.
fn next_id(len: usize) -> Result<RoomId, WorldError> {
    u32::try_from(len)
        .map(RoomId)
        .map_err(|_| WorldError::TooManyRooms {
            max: u64::from(u32::MAX) + 1,
        })
}
