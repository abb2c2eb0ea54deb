//! Error types shared across the tesser workspace.
//!
//! Orientation algebra never fails: it reports ambiguity and missing
//! locations through the [`Orientation`](crate::Orientation) sentinels.
//! The types here cover the places where no value can be produced at all.

use std::error::Error;
use std::fmt;

/// Errors from reading or writing a tile through an orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileError {
    /// The orientation is the ambiguous sentinel.
    Ambiguous,
    /// The orientation is the out-of-bounds sentinel, names a room that
    /// does not exist, or lies outside its room.
    OutOfBounds,
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ambiguous => write!(f, "accessing ambiguous tile"),
            Self::OutOfBounds => write!(f, "accessing out-of-bounds tile"),
        }
    }
}

impl Error for TileError {}

/// A numeric direction code outside `0..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidDirection {
    /// The rejected code.
    pub code: i64,
}

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid direction code {} (expected 0..=5)", self.code)
    }
}

impl Error for InvalidDirection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_error_messages() {
        assert_eq!(TileError::Ambiguous.to_string(), "accessing ambiguous tile");
        assert_eq!(
            TileError::OutOfBounds.to_string(),
            "accessing out-of-bounds tile"
        );
    }

    #[test]
    fn invalid_direction_names_the_code() {
        let err = InvalidDirection { code: 9 };
        assert!(err.to_string().contains('9'));
    }
}
