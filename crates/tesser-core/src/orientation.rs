//! [`Orientation`]: a transform anchored in a room, or a sentinel.

use crate::direction::Direction;
use crate::id::RoomId;
use crate::transform::Transform;
use std::fmt;

/// A transform expressed in a specific room's local frame.
///
/// A `Located` value is not necessarily inside its room: door transforms
/// and the candidate positions tried while crossing a boundary routinely
/// sit outside. Only values returned by the step resolver are guaranteed
/// to be in bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Located {
    /// Room whose frame `transform` is expressed in.
    pub room: RoomId,
    /// Position and facing within that frame.
    pub transform: Transform,
}

/// Where something stands and which way it faces, or why that is unknown.
///
/// The two sentinels absorb every operation: anything applied to
/// `Ambiguous` stays `Ambiguous`, anything applied to `OutOfBounds` stays
/// `OutOfBounds`, and when both meet `Ambiguous` wins.
///
/// # Examples
///
/// ```
/// use tesser_core::{Direction, Orientation, RoomId};
///
/// let o = Orientation::at(RoomId(0), 2, 3, 0, Direction::YPlus);
/// let back = o.plus(o.inverse());
/// assert_eq!(back, Orientation::at(RoomId(0), 0, 0, 0, Direction::XPlus));
///
/// assert!(Orientation::Ambiguous.spin(Direction::YPlus).is_ambiguous());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A definite place and facing.
    Located(Located),
    /// No location exists: the move left every room, or the value never
    /// named one.
    OutOfBounds,
    /// Different resolution orders, or conflicting doors, disagree.
    Ambiguous,
}

impl Orientation {
    /// Anchor `transform` in `room`.
    pub fn located(room: RoomId, transform: Transform) -> Self {
        Self::Located(Located { room, transform })
    }

    /// Anchor the components `(x, y, z, rotation)` in `room`.
    pub fn at(room: RoomId, x: i32, y: i32, z: i32, rotation: Direction) -> Self {
        Self::located(room, Transform::new(x, y, z, rotation))
    }

    /// Zero offset and no rotation in `room`.
    pub fn origin(room: RoomId) -> Self {
        Self::located(room, Transform::IDENTITY)
    }

    /// Returns `true` for the ambiguous sentinel.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous)
    }

    /// Returns `true` for the out-of-bounds sentinel.
    ///
    /// This does not look at room bounds; a `Located` value outside its
    /// room answers `false` here. Use `World::settle` to classify those.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds)
    }

    /// Returns `true` for either sentinel.
    pub fn is_sentinel(&self) -> bool {
        !self.is_located()
    }

    /// Returns `true` when this is a `Located` value.
    pub fn is_located(&self) -> bool {
        matches!(self, Self::Located(_))
    }

    /// The located payload, if any.
    pub fn as_located(&self) -> Option<&Located> {
        match self {
            Self::Located(loc) => Some(loc),
            _ => None,
        }
    }

    /// Room of a located value.
    pub fn room(&self) -> Option<RoomId> {
        self.as_located().map(|loc| loc.room)
    }

    /// Transform of a located value.
    pub fn transform(&self) -> Option<Transform> {
        self.as_located().map(|loc| loc.transform)
    }

    /// Read `other` in `self`'s frame and return the result in `self`'s room.
    ///
    /// `other`'s room is ignored; only its transform is reprojected.
    /// A sum that leaves the `i32` range is [`OutOfBounds`](Self::OutOfBounds).
    pub fn plus(self, other: Orientation) -> Orientation {
        match (self, other) {
            (Self::Ambiguous, _) | (_, Self::Ambiguous) => Self::Ambiguous,
            (Self::OutOfBounds, _) | (_, Self::OutOfBounds) => Self::OutOfBounds,
            (Self::Located(a), Self::Located(b)) => match a.transform.checked_plus(b.transform) {
                Some(transform) => Self::located(a.room, transform),
                None => Self::OutOfBounds,
            },
        }
    }

    /// The orientation that, added to `self` with [`plus`](Self::plus),
    /// gives [`origin`](Self::origin) of `self`'s room.
    ///
    /// A position with an `i32::MIN` coordinate has no inverse and maps to
    /// [`OutOfBounds`](Self::OutOfBounds).
    pub fn inverse(self) -> Orientation {
        match self {
            Self::Located(loc) => match loc.transform.checked_inverse() {
                Some(transform) => Self::located(loc.room, transform),
                None => Self::OutOfBounds,
            },
            sentinel => sentinel,
        }
    }

    /// Same position, rotation composed with `rot`.
    pub fn spin(self, rot: Direction) -> Orientation {
        match self {
            Self::Located(loc) => Self::located(loc.room, loc.transform.spin(rot)),
            sentinel => sentinel,
        }
    }
}

impl From<Located> for Orientation {
    fn from(loc: Located) -> Self {
        Self::Located(loc)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Located(loc) => write!(f, "room {} at {}", loc.room, loc.transform),
            Self::OutOfBounds => write!(f, "out of bounds"),
            Self::Ambiguous => write!(f, "ambiguous"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use Direction::*;

    const SENTINELS: [Orientation; 2] = [Orientation::OutOfBounds, Orientation::Ambiguous];

    #[test]
    fn plus_keeps_left_room() {
        let a = Orientation::at(RoomId(1), 1, 1, 0, XPlus);
        let b = Orientation::at(RoomId(2), 2, 0, 0, YPlus);
        assert_eq!(a.plus(b), Orientation::at(RoomId(1), 3, 1, 0, YPlus));
    }

    #[test]
    fn sentinels_absorb_unary_operations() {
        for s in SENTINELS {
            assert_eq!(s.inverse(), s);
            assert_eq!(s.spin(YMinus), s);
        }
    }

    #[test]
    fn sentinels_absorb_plus_with_ambiguous_winning() {
        let loc = Orientation::origin(RoomId(0));
        for s in SENTINELS {
            assert_eq!(loc.plus(s), s);
            assert_eq!(s.plus(loc), s);
            assert_eq!(s.plus(s), s);
        }
        assert!(Orientation::OutOfBounds
            .plus(Orientation::Ambiguous)
            .is_ambiguous());
        assert!(Orientation::Ambiguous
            .plus(Orientation::OutOfBounds)
            .is_ambiguous());
    }

    #[test]
    fn accessors_report_payload() {
        let o = Orientation::at(RoomId(4), 1, 2, 3, ZPlus);
        assert!(o.is_located());
        assert!(!o.is_sentinel());
        assert_eq!(o.room(), Some(RoomId(4)));
        assert_eq!(o.transform(), Some(Transform::new(1, 2, 3, ZPlus)));
        assert_eq!(Orientation::Ambiguous.room(), None);
        assert!(Orientation::OutOfBounds.is_out_of_bounds());
        assert!(!Orientation::OutOfBounds.is_ambiguous());
    }

    #[test]
    fn display_names_sentinels() {
        assert_eq!(Orientation::OutOfBounds.to_string(), "out of bounds");
        assert_eq!(Orientation::Ambiguous.to_string(), "ambiguous");
        assert_eq!(
            Orientation::at(RoomId(0), 1, 0, 0, XPlus).to_string(),
            "room 0 at (1, 0, 0) facing +x"
        );
    }

    #[test]
    fn overflow_is_out_of_bounds() {
        let far = Orientation::at(RoomId(0), i32::MAX, 0, 0, XPlus);
        let step = Orientation::at(RoomId(0), 1, 0, 0, XPlus);
        assert_eq!(far.plus(step), Orientation::OutOfBounds);
        assert_eq!(
            Orientation::at(RoomId(0), 0, i32::MIN, 0, YPlus).inverse(),
            Orientation::OutOfBounds
        );
    }

    proptest! {
        #[test]
        fn plus_inverse_is_origin(
            room in 0u32..8,
            x in -100i32..100,
            y in -100i32..100,
            z in -100i32..100,
            r in 0u8..6,
        ) {
            let o = Orientation::at(RoomId(room), x, y, z, Direction::ALL[r as usize]);
            prop_assert_eq!(o.plus(o.inverse()), Orientation::origin(RoomId(room)));
        }
    }
}
