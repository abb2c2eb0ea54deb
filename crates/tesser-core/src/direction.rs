//! The six axis directions and their composition rule.

use crate::error::InvalidDirection;
use std::fmt;

/// One of the six axis directions of a room's local frame.
///
/// The four horizontal directions are quarter turns about `+z`, counted
/// from `+x` towards `+y`: `XPlus -> YPlus -> XMinus -> YMinus`. They form
/// a cyclic group of order 4 under [`rotate`](Direction::rotate). The two
/// vertical directions sit outside that group.
///
/// A direction doubles as a rotation: an orientation whose rotation is
/// `YPlus` has been turned one quarter turn from the room's `+x` axis.
///
/// # Examples
///
/// ```
/// use tesser_core::Direction;
///
/// assert_eq!(Direction::YPlus.rotate(Direction::XMinus), Direction::YMinus);
/// assert_eq!(Direction::XPlus.opposite(), Direction::XMinus);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Towards increasing `x`. Also the identity rotation.
    XPlus = 0,
    /// Towards increasing `y`. One quarter turn.
    YPlus = 1,
    /// Towards decreasing `x`. Half turn.
    XMinus = 2,
    /// Towards decreasing `y`. Three quarter turns.
    YMinus = 3,
    /// Towards increasing `z` (up).
    ZPlus = 4,
    /// Towards decreasing `z` (down).
    ZMinus = 5,
}

impl Direction {
    /// All six directions, ordered by code.
    pub const ALL: [Direction; 6] = [
        Direction::XPlus,
        Direction::YPlus,
        Direction::XMinus,
        Direction::YMinus,
        Direction::ZPlus,
        Direction::ZMinus,
    ];

    /// The four horizontal directions, ordered by quarter turns.
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::XPlus,
        Direction::YPlus,
        Direction::XMinus,
        Direction::YMinus,
    ];

    /// Numeric code used by the text format (`0..=5`).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Returns `true` for `ZPlus` and `ZMinus`.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::ZPlus | Self::ZMinus)
    }

    /// Number of quarter turns about `+z`, or `None` for vertical directions.
    pub fn quarter_turns(self) -> Option<u8> {
        if self.is_vertical() {
            None
        } else {
            Some(self as u8)
        }
    }

    /// The direction pointing the other way along the same axis.
    pub fn opposite(self) -> Self {
        match self {
            Self::XPlus => Self::XMinus,
            Self::YPlus => Self::YMinus,
            Self::XMinus => Self::XPlus,
            Self::YMinus => Self::YPlus,
            Self::ZPlus => Self::ZMinus,
            Self::ZMinus => Self::ZPlus,
        }
    }

    /// Compose two rotations: `self` followed by `other` in `self`'s frame.
    ///
    /// - horizontal with horizontal adds quarter turns mod 4;
    /// - two vertical directions give `XPlus` when they differ and `XMinus`
    ///   (a half turn) when they are equal;
    /// - otherwise the vertical operand dominates.
    ///
    /// The equal-vertical half turn is carried over unverified; no caller
    /// relies on it.
    pub fn rotate(self, other: Direction) -> Direction {
        match (self.quarter_turns(), other.quarter_turns()) {
            (Some(a), Some(b)) => Self::HORIZONTAL[((a + b) % 4) as usize],
            (None, None) if self == other => Self::XMinus,
            (None, None) => Self::XPlus,
            (None, Some(_)) => self,
            (Some(_), None) => other,
        }
    }

    /// The rotation that undoes `self` under [`rotate`](Self::rotate).
    ///
    /// Horizontal rotations invert within the quarter-turn group; a vertical
    /// rotation is undone by the opposite vertical, since two differing
    /// verticals compose to `XPlus`.
    pub fn inverse(self) -> Direction {
        match self.quarter_turns() {
            Some(k) => Self::HORIZONTAL[((4 - k) % 4) as usize],
            None => self.opposite(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::XPlus => "+x",
            Self::YPlus => "+y",
            Self::XMinus => "-x",
            Self::YMinus => "-y",
            Self::ZPlus => "+z",
            Self::ZMinus => "-z",
        };
        f.write_str(name)
    }
}

impl TryFrom<i64> for Direction {
    type Error = InvalidDirection;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        u8::try_from(code)
            .ok()
            .and_then(Self::from_code)
            .ok_or(InvalidDirection { code })
    }
}
