//! Error types for partition-cache.
//!
//! Cache lookups never fail on their own: a producer's error is handed back
//! to the caller untouched. The variants here cover configuration only.

use thiserror::Error;

/// Result type alias for partition-cache operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    /// Create an invalid configuration error with the given message.
    pub fn invalid_configuration<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_configuration("caching_ttl must be finite");
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: caching_ttl must be finite"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            Error::invalid_configuration("a"),
            Error::InvalidConfiguration("a".to_string())
        );
        assert_ne!(
            Error::invalid_configuration("a"),
            Error::invalid_configuration("b")
        );
    }
}
