//! Error types for the Ripple engine.

use alloc::string::String;
use core::fmt;

/// Result type alias for Ripple operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for path-addressed operations.
///
/// The single-field read/write protocol is total and never errors; only the
/// path-navigation API can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No field with the given name exists at this level.
    KeyNotFound {
        key: String,
    },
    /// A path tried to descend through a leaf value.
    NotAnAggregate {
        key: String,
    },
    /// An empty path was supplied.
    EmptyPath,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound { key } => {
                write!(f, "Key not found: {}", key)
            }
            Error::NotAnAggregate { key } => {
                write!(f, "Cannot descend into leaf value at key: {}", key)
            }
            Error::EmptyPath => {
                write!(f, "Empty path")
            }
        }
    }
}

impl Error {
    /// Creates a key not found error.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Error::KeyNotFound { key: key.into() }
    }

    /// Creates a not-an-aggregate error.
    pub fn not_an_aggregate(key: impl Into<String>) -> Self {
        Error::NotAnAggregate { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::key_not_found("name");
        assert!(err.to_string().contains("name"));

        let err = Error::not_an_aggregate("count");
        assert!(err.to_string().contains("count"));

        assert!(Error::EmptyPath.to_string().contains("Empty"));
    }

    #[test]
    fn test_error_constructors() {
        match Error::key_not_found("a") {
            Error::KeyNotFound { key } => assert_eq!(key, "a"),
            _ => panic!("Wrong error type"),
        }
    }
}
