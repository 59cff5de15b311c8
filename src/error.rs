//! Error types for the fallible edges of the crate.
//!
//! Rendering itself never fails: every value has a defined textual form and
//! reference cycles are substituted rather than reported. Errors only arise
//! at the boundaries where outside data comes in:
//!
//! - **Conversion**: turning an arbitrary `T: Serialize` into a [`Value`](crate::Value)
//!   graph with [`to_value`](crate::to_value)
//! - **Timestamp parsing**: reading a log timestamp from text with
//!   [`parse_timestamp`](crate::parse_timestamp)
//!
//! ## Examples
//!
//! ```rust
//! use logvalue::{parse_timestamp, Error};
//!
//! let result = parse_timestamp("yesterday");
//! assert!(matches!(result, Err(Error::InvalidTimestamp { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while building values or parsing timestamps.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Map key that cannot be used as a record key
    #[error("Record key must be a string, found {0}")]
    KeyMustBeString(String),

    /// Text that is neither an ISO (`Z`-terminated) nor a standard timestamp
    #[error("Invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp { input: String, reason: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a key error for a map key of the given kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logvalue::Error;
    ///
    /// let err = Error::key_must_be_string("sequence");
    /// assert!(err.to_string().contains("sequence"));
    /// ```
    pub fn key_must_be_string(found: &str) -> Self {
        Error::KeyMustBeString(found.to_string())
    }

    /// Creates a timestamp error carrying the rejected input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logvalue::Error;
    ///
    /// let err = Error::invalid_timestamp("2025-13-01T00:00:00Z", "month out of range");
    /// assert!(err.to_string().contains("month out of range"));
    /// ```
    pub fn invalid_timestamp(input: &str, reason: &str) -> Self {
        Error::InvalidTimestamp {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logvalue::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::key_must_be_string("sequence").to_string(),
            "Record key must be a string, found sequence"
        );
        let err = Error::invalid_timestamp("nope", "pattern mismatch");
        assert_eq!(err.to_string(), "Invalid timestamp \"nope\": pattern mismatch");
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::ser::Error>::custom("boom");
        assert!(matches!(err, Error::Custom(ref m) if m == "boom"));
    }
}
