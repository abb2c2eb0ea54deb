//! Loader limits and their validation.

use std::error::Error;
use std::fmt;

// ── LoadConfigError ────────────────────────────────────────────────

/// Errors detected during [`LoadConfig::validate()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadConfigError {
    /// `max_rooms` was zero.
    ZeroRoomLimit,
    /// `max_cells` was zero.
    ZeroCellLimit,
}

impl fmt::Display for LoadConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRoomLimit => write!(f, "max_rooms must be at least 1"),
            Self::ZeroCellLimit => write!(f, "max_cells must be at least 1"),
        }
    }
}

impl Error for LoadConfigError {}

// ── LoadConfig ─────────────────────────────────────────────────────

/// Bounds on what [`load_with`](crate::load_with) will allocate.
///
/// Both limits are checked against the sizes the input *declares*, before
/// any tile storage is reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadConfig {
    /// Most rooms accepted. Default: 65 536.
    pub max_rooms: usize,
    /// Most tiles accepted, summed over all rooms. Default: 2^26.
    pub max_cells: usize,
}

impl LoadConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), LoadConfigError> {
        if self.max_rooms == 0 {
            return Err(LoadConfigError::ZeroRoomLimit);
        }
        if self.max_cells == 0 {
            return Err(LoadConfigError::ZeroCellLimit);
        }
        Ok(())
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_rooms: 1 << 16,
            max_cells: 1 << 26,
        }
    }
}
