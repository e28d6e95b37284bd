//! Matcher error types

use std::fmt;
use thiserror::Error;

/// Which input record an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSide {
    /// The first record passed to `compare`
    Left,
    /// The second record passed to `compare`
    Right,
}

impl fmt::Display for RecordSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSide::Left => f.write_str("left"),
            RecordSide::Right => f.write_str("right"),
        }
    }
}

/// Errors that can occur when building a matcher or comparing records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    /// A required field is absent or blank
    #[error("Missing required field '{field}' on {side} record")]
    MissingRequiredField {
        /// Record missing the field
        side: RecordSide,
        /// Field name
        field: &'static str,
    },

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
