//! Error types for world construction and step resolution.

use std::error::Error;
use std::fmt;
use tesser_core::{RoomId, Transform};

/// Errors arising from building or mutating a [`World`](crate::World).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// A room id does not name a room in this world.
    UnknownRoom {
        /// The offending id.
        room: RoomId,
        /// Number of rooms in the world.
        len: usize,
    },
    /// A door was requested towards a sentinel orientation.
    SentinelDoor,
    /// A room dimension, or the product of all three, does not fit the
    /// coordinate or index types.
    DimensionTooLarge {
        /// Which dimension overflowed (`"width"`, `"height"`, `"depth"` or
        /// `"cells"` for the product).
        name: &'static str,
        /// The offending value.
        value: u64,
        /// Largest accepted value.
        max: u64,
    },
    /// A door offset lies further from the origin than any room reaches.
    DoorOffsetTooLarge {
        /// Axis of the offending offset (`"x"`, `"y"` or `"z"`).
        axis: &'static str,
        /// The offending value.
        value: i64,
        /// Largest accepted magnitude.
        max: u64,
    },
    /// The world already holds as many rooms as a [`RoomId`] can name.
    TooManyRooms {
        /// Largest number of rooms.
        max: u64,
    },
    /// A tile grid does not have `width * height * depth` entries.
    TileCountMismatch {
        /// Cells implied by the dimensions.
        expected: usize,
        /// Tiles supplied.
        found: usize,
    },
    /// A door has no inverse partner registered on its target room.
    UnpairedDoor {
        /// Room holding the door.
        room: RoomId,
        /// Position of the door in that room's door list.
        door: usize,
        /// Room the door leads to.
        target: RoomId,
        /// The door's transform.
        transform: Transform,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRoom { room, len } => {
                write!(f, "room {room} does not exist (world has {len} rooms)")
            }
            Self::SentinelDoor => write!(f, "cannot add a door to a sentinel orientation"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::DoorOffsetTooLarge { axis, value, max } => {
                write!(f, "door offset {axis} = {value} exceeds magnitude {max}")
            }
            Self::TooManyRooms { max } => write!(f, "world cannot hold more than {max} rooms"),
            Self::TileCountMismatch { expected, found } => {
                write!(f, "expected {expected} tiles, found {found}")
            }
            Self::UnpairedDoor {
                room,
                door,
                target,
                transform,
            } => write!(
                f,
                "door {door} of room {room} to room {target} at {transform} has no inverse"
            ),
        }
    }
}

impl Error for WorldError {}

/// Errors from a configured [`StepResolver`](crate::StepResolver).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The move batch is longer than the resolver accepts.
    BatchTooLarge {
        /// Moves in the batch.
        len: usize,
        /// Configured cap.
        max: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BatchTooLarge { len, max } => {
                write!(f, "move batch of {len} exceeds the limit of {max}")
            }
        }
    }
}

impl Error for StepError {}
