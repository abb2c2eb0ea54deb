//! Step resolver configuration and validation.
//!
//! [`ResolveConfig`] is the builder input for a
//! [`StepResolver`](crate::StepResolver). [`validate()`](ResolveConfig::validate)
//! is called by [`StepResolver::with_config`](crate::StepResolver::with_config).

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ResolveConfig::validate()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_moves` was set to zero, which would reject every batch but
    /// the empty one.
    ZeroMoveCap,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMoveCap => write!(f, "max_moves must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── ResolveConfig ──────────────────────────────────────────────────

/// Tuning for multi-step resolution.
///
/// The resolver explores every order of a batch's distinct directions, so
/// the work grows quickly with batch length. `max_moves` lets a host put a
/// ceiling on what it will accept from untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveConfig {
    /// Longest batch accepted. `None` = no limit. Default: `None`.
    pub max_moves: Option<usize>,
    /// Cache results per (position, remaining batch). Default: `true`.
    ///
    /// Turning this off changes the amount of work, never the result.
    pub memoize: bool,
}

impl ResolveConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_moves == Some(0) {
            return Err(ConfigError::ZeroMoveCap);
        }
        Ok(())
    }
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            max_moves: None,
            memoize: true,
        }
    }
}
