//! Rigid grid transforms: a translation plus a rotation about `+z`.
//!
//! A [`Transform`] is both "a place and a facing" and "a displacement and
//! a turn". Composition with [`checked_plus`](Transform::checked_plus)
//! reads the right operand in the left operand's frame, which is what lets
//! a door carry a position from one room's frame into its neighbour's.

use crate::direction::Direction;
use std::fmt;

/// A position and rotation relative to some frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transform {
    /// Offset along the frame's `x` axis.
    pub x: i32,
    /// Offset along the frame's `y` axis.
    pub y: i32,
    /// Offset along the frame's `z` axis.
    pub z: i32,
    /// Facing, as a rotation away from the frame's `+x` axis.
    pub rotation: Direction,
}

impl Transform {
    /// Zero offset, no rotation.
    pub const IDENTITY: Transform = Transform {
        x: 0,
        y: 0,
        z: 0,
        rotation: Direction::XPlus,
    };

    /// Create a transform from its four components.
    pub const fn new(x: i32, y: i32, z: i32, rotation: Direction) -> Self {
        Self { x, y, z, rotation }
    }

    /// Offset as an `[x, y, z]` triple.
    pub fn position(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Compose `self` with `other`, reading `other` in `self`'s frame.
    ///
    /// `other`'s horizontal offset is turned by `self.rotation` (a vertical
    /// rotation turns nothing), `z` is carried through, the offsets are
    /// summed, and the rotations compose with [`Direction::rotate`].
    ///
    /// Returns `None` if any coordinate overflows `i32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tesser_core::{Direction, Transform};
    ///
    /// let facing_y = Transform::new(5, 5, 0, Direction::YPlus);
    /// let ahead = Transform::new(1, 0, 0, Direction::XPlus);
    /// assert_eq!(
    ///     facing_y.checked_plus(ahead),
    ///     Some(Transform::new(5, 6, 0, Direction::YPlus))
    /// );
    /// assert_eq!(Transform::new(i32::MAX, 0, 0, Direction::XPlus).checked_plus(ahead), None);
    /// ```
    pub fn checked_plus(self, other: Transform) -> Option<Transform> {
        let (dx, dy) = turn(self.rotation, other.x, other.y)?;
        Some(Transform {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(other.z)?,
            rotation: self.rotation.rotate(other.rotation),
        })
    }

    /// The transform that composes with `self` to [`IDENTITY`](Self::IDENTITY)
    /// on either side.
    ///
    /// Returns `None` if a coordinate is `i32::MIN`, which has no negation.
    pub fn checked_inverse(self) -> Option<Transform> {
        let rotation = self.rotation.inverse();
        let (x, y) = turn(rotation, self.x.checked_neg()?, self.y.checked_neg()?)?;
        Some(Transform {
            x,
            y,
            z: self.z.checked_neg()?,
            rotation,
        })
    }

    /// Same offset, rotation composed with `rot`.
    pub fn spin(self, rot: Direction) -> Transform {
        Transform {
            rotation: self.rotation.rotate(rot),
            ..self
        }
    }

    /// Move one cell along `dir` as seen from this transform's facing.
    ///
    /// No bounds are involved; the caller decides what the new offset means.
    /// Returns `None` if the move would leave the `i32` range.
    pub fn checked_advance(self, dir: Direction) -> Option<Transform> {
        let mut next = self;
        match self.rotation.rotate(dir) {
            Direction::XPlus => next.x = next.x.checked_add(1)?,
            Direction::YPlus => next.y = next.y.checked_add(1)?,
            Direction::XMinus => next.x = next.x.checked_sub(1)?,
            Direction::YMinus => next.y = next.y.checked_sub(1)?,
            Direction::ZPlus => next.z = next.z.checked_add(1)?,
            Direction::ZMinus => next.z = next.z.checked_sub(1)?,
        }
        Some(next)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}) facing {}", self.x, self.y, self.z, self.rotation)
    }
}

/// Turn the horizontal offset `(x, y)` by `rotation` quarter turns.
fn turn(rotation: Direction, x: i32, y: i32) -> Option<(i32, i32)> {
    Some(match rotation {
        Direction::YPlus => (y.checked_neg()?, x),
        Direction::XMinus => (x.checked_neg()?, y.checked_neg()?),
        Direction::YMinus => (y, x.checked_neg()?),
        Direction::XPlus | Direction::ZPlus | Direction::ZMinus => (x, y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use Direction::*;

    fn t(x: i32, y: i32, z: i32, r: Direction) -> Transform {
        Transform::new(x, y, z, r)
    }

    // In-range shorthands for the checked operations.
    impl Transform {
        fn plus(self, other: Transform) -> Transform {
            self.checked_plus(other).unwrap()
        }

        fn inverse(self) -> Transform {
            self.checked_inverse().unwrap()
        }

        fn advance(self, dir: Direction) -> Transform {
            self.checked_advance(dir).unwrap()
        }
    }

    #[test]
    fn plus_turns_offset_by_left_rotation() {
        let unit = t(1, 0, 0, XPlus);
        assert_eq!(t(0, 0, 0, XPlus).plus(unit), t(1, 0, 0, XPlus));
        assert_eq!(t(0, 0, 0, YPlus).plus(unit), t(0, 1, 0, YPlus));
        assert_eq!(t(0, 0, 0, XMinus).plus(unit), t(-1, 0, 0, XMinus));
        assert_eq!(t(0, 0, 0, YMinus).plus(unit), t(0, -1, 0, YMinus));
    }

    #[test]
    fn plus_carries_z_unturned() {
        assert_eq!(t(0, 0, 2, YPlus).plus(t(0, 0, 3, XPlus)), t(0, 0, 5, YPlus));
    }

    #[test]
    fn vertical_rotation_does_not_turn_offsets() {
        assert_eq!(t(1, 1, 1, ZPlus).plus(t(2, 3, 0, XPlus)), t(3, 4, 1, ZPlus));
    }

    #[test]
    fn advance_follows_the_facing() {
        let east = t(0, 0, 0, XPlus);
        assert_eq!(east.advance(XPlus), t(1, 0, 0, XPlus));
        let north = t(0, 0, 0, YPlus);
        assert_eq!(north.advance(XPlus), t(0, 1, 0, YPlus));
        assert_eq!(north.advance(YPlus), t(-1, 0, 0, YPlus));
        assert_eq!(north.advance(ZMinus), t(0, 0, -1, YPlus));
    }

    #[test]
    fn advance_agrees_with_plus_of_unit_offset() {
        for r in Direction::HORIZONTAL {
            let start = t(3, -2, 1, r);
            assert_eq!(start.advance(XPlus), start.plus(t(1, 0, 0, XPlus)));
            assert_eq!(start.advance(YPlus), start.plus(t(0, 1, 0, XPlus)));
        }
    }

    #[test]
    fn overflowing_plus_is_none() {
        let far = t(i32::MAX, 0, 0, XPlus);
        assert_eq!(far.checked_plus(t(1, 0, 0, XPlus)), None);
        assert_eq!(t(0, 0, i32::MIN, XPlus).checked_plus(t(0, 0, -1, XPlus)), None);
        // Turning an i32::MIN offset needs its negation.
        assert_eq!(t(0, 0, 0, XMinus).checked_plus(t(i32::MIN, 0, 0, XPlus)), None);
        assert_eq!(t(0, 0, 0, XPlus).checked_plus(t(i32::MIN, 0, 0, XPlus)), Some(t(i32::MIN, 0, 0, XPlus)));
    }

    #[test]
    fn min_offsets_have_no_inverse() {
        assert_eq!(t(i32::MIN, 0, 0, XPlus).checked_inverse(), None);
        assert_eq!(t(0, i32::MIN, 0, YPlus).checked_inverse(), None);
        assert_eq!(t(0, 0, i32::MIN, ZPlus).checked_inverse(), None);
        assert_eq!(
            t(i32::MAX, -i32::MAX, i32::MAX, YMinus).checked_inverse().and_then(Transform::checked_inverse),
            Some(t(i32::MAX, -i32::MAX, i32::MAX, YMinus))
        );
    }

    #[test]
    fn advance_stops_at_the_edge_of_i32() {
        assert_eq!(t(i32::MAX, 0, 0, XPlus).checked_advance(XPlus), None);
        assert_eq!(t(0, i32::MIN, 0, XPlus).checked_advance(YMinus), None);
        assert_eq!(t(0, 0, i32::MAX, YPlus).checked_advance(ZPlus), None);
    }

    #[test]
    fn spin_keeps_position() {
        assert_eq!(t(4, 5, 6, YPlus).spin(YPlus), t(4, 5, 6, XMinus));
    }

    #[test]
    fn identity_is_default() {
        assert_eq!(Transform::default(), Transform::IDENTITY);
    }

    fn arb_transform() -> impl Strategy<Value = Transform> {
        (-1000i32..1000, -1000i32..1000, -1000i32..1000, 0u8..6)
            .prop_map(|(x, y, z, r)| t(x, y, z, Direction::ALL[r as usize]))
    }

    fn arb_horizontal_transform() -> impl Strategy<Value = Transform> {
        (-1000i32..1000, -1000i32..1000, -1000i32..1000, 0u8..4)
            .prop_map(|(x, y, z, r)| t(x, y, z, Direction::HORIZONTAL[r as usize]))
    }

    proptest! {
        #[test]
        fn plus_inverse_is_identity(a in arb_transform()) {
            prop_assert_eq!(a.plus(a.inverse()), Transform::IDENTITY);
            prop_assert_eq!(a.inverse().plus(a), Transform::IDENTITY);
        }

        #[test]
        fn inverse_is_an_involution(a in arb_transform()) {
            prop_assert_eq!(a.inverse().inverse(), a);
        }

        #[test]
        fn horizontal_plus_is_associative(
            a in arb_horizontal_transform(),
            b in arb_horizontal_transform(),
            c in arb_horizontal_transform(),
        ) {
            prop_assert_eq!(a.plus(b).plus(c), a.plus(b.plus(c)));
        }

        #[test]
        fn advance_then_opposite_returns(a in arb_horizontal_transform(), d in 0u8..6) {
            let d = Direction::ALL[d as usize];
            prop_assert_eq!(a.advance(d).advance(d.opposite()), a);
        }
    }
}
