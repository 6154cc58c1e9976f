//! Error types for slotcache

use std::fmt;

/// Result type alias for slotcache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Capacity must be greater than zero
    InvalidCapacity(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(size) => {
                write!(f, "invalid capacity: {} (must be > 0)", size)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(format!("{}", err), "invalid capacity: 0 (must be > 0)");
    }
}
