//! Error types for mongokit.
//!
//! Rendering itself is total and never fails; errors only arise when
//! constructing [`crate::value::Value`]s from textual representations
//! (object id hex, decimal strings).

use std::fmt;

/// Crate-wide `Result` type using [`MongokitError`] as the error.
pub type Result<T> = std::result::Result<T, MongokitError>;

/// Top-level error type for mongokit operations.
#[derive(Debug)]
pub enum MongokitError {
    /// The supplied string is not a valid 24-character hex object id.
    InvalidObjectId(String),

    /// The supplied string is not a valid 128-bit decimal.
    InvalidDecimal(String),
}

impl fmt::Display for MongokitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MongokitError::InvalidObjectId(msg) => {
                write!(f, "invalid object id: {}", msg)
            }
            MongokitError::InvalidDecimal(msg) => {
                write!(f, "invalid decimal: {}", msg)
            }
        }
    }
}

impl std::error::Error for MongokitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MongokitError::InvalidObjectId("bad length".to_string());
        assert_eq!(err.to_string(), "invalid object id: bad length");

        let err = MongokitError::InvalidDecimal("empty".to_string());
        assert_eq!(err.to_string(), "invalid decimal: empty");
    }
}
