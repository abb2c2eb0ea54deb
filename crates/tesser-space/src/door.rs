//! Doors: directed transforms from one room's frame into another's.

use crate::error::WorldError;
use crate::room::Room;
use std::fmt;
use tesser_core::{Located, Orientation, RoomId, Transform};

/// An outgoing connection stored on a room.
///
/// `transform` is the source room's frame as seen from `target`'s frame.
/// A position that steps off the source room is carried across by
/// composing it onto `transform`; the door accepts the crossing when the
/// result lands inside `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Door {
    /// Room the door leads into.
    pub target: RoomId,
    /// Source frame expressed in the target's frame.
    pub transform: Transform,
}

impl Door {
    /// Create a door into `target`.
    pub fn new(target: RoomId, transform: Transform) -> Self {
        Self { target, transform }
    }

    /// Carry `candidate`, expressed in the source room's frame, into the
    /// target room's frame.
    ///
    /// `None` if the result leaves the `i32` range, which no room contains.
    pub fn reproject(&self, candidate: Transform) -> Option<Located> {
        Some(Located {
            room: self.target,
            transform: self.transform.checked_plus(candidate)?,
        })
    }

    /// The paired door leading back into `source`.
    ///
    /// `None` if an offset is `i32::MIN`; [`paired`](Self::paired) rejects
    /// such doors up front.
    pub fn inverse(&self, source: RoomId) -> Option<Door> {
        Some(Door {
            target: source,
            transform: self.transform.checked_inverse()?,
        })
    }

    /// Check the offsets against [`Room::MAX_DIM`] and return the inverse
    /// door leading back into `source`.
    pub fn paired(&self, source: RoomId) -> Result<Door, WorldError> {
        let Transform { x, y, z, .. } = self.transform;
        for (axis, value) in [("x", x), ("y", y), ("z", z)] {
            if u64::from(value.unsigned_abs()) > u64::from(Room::MAX_DIM) {
                return Err(WorldError::DoorOffsetTooLarge {
                    axis,
                    value: i64::from(value),
                    max: u64::from(Room::MAX_DIM),
                });
            }
        }
        self.inverse(source).ok_or(WorldError::DoorOffsetTooLarge {
            axis: "x",
            value: i64::from(x),
            max: u64::from(Room::MAX_DIM),
        })
    }

    /// This door as an orientation in its target room.
    pub fn as_orientation(&self) -> Orientation {
        Orientation::located(self.target, self.transform)
    }
}

impl TryFrom<Orientation> for Door {
    type Error = WorldError;

    fn try_from(o: Orientation) -> Result<Self, Self::Error> {
        match o {
            Orientation::Located(loc) => Ok(Door::new(loc.room, loc.transform)),
            _ => Err(WorldError::SentinelDoor),
        }
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "door to room {} via {}", self.target, self.transform)
    }
}
