//! Error types for loading and saving worlds.

use crate::config::LoadConfigError;
use std::fmt;
use std::io;

/// Errors that can occur while reading or writing a world file.
#[derive(Debug)]
pub enum FormatError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// A line could not be interpreted.
    Parse {
        /// 1-based line number.
        line: usize,
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The input ended in the middle of a room.
    UnexpectedEof {
        /// What the reader was looking for.
        expected: &'static str,
    },
    /// The input asks for more than the [`LoadConfig`](crate::LoadConfig)
    /// allows.
    LimitExceeded {
        /// Which limit (`"rooms"` or `"cells"`).
        what: &'static str,
        /// Amount requested by the input.
        requested: u64,
        /// Configured limit.
        max: u64,
    },
    /// The [`LoadConfig`](crate::LoadConfig) itself is invalid.
    Config(LoadConfigError),
}

impl FormatError {
    pub(crate) fn parse(line: usize, detail: impl Into<String>) -> Self {
        Self::Parse {
            line,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse { line, detail } => write!(f, "line {line}: {detail}"),
            Self::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            Self::LimitExceeded {
                what,
                requested,
                max,
            } => write!(f, "{what} = {requested} exceeds load limit {max}"),
            Self::Config(e) => write!(f, "invalid load config: {e}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FormatError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<LoadConfigError> for FormatError {
    fn from(e: LoadConfigError) -> Self {
        Self::Config(e)
    }
}
