//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write
/// `Result<T>`. This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every variant is an input-boundary problem: once a run starts, the
/// simulation is total and deterministic, so the engine itself has no
/// recoverable failures. Contract violations inside the engine (for
/// example evicting a page that is not resident) panic instead of being
/// reported here, since continuing would corrupt the fault count.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame count parsed to a negative number.
    #[error("invalid frame count: {0} (must be >= 0)")]
    InvalidFrameCount(i64),

    /// Selected policy name is not one of FIFO, LRU, or Optimal.
    #[error("unknown replacement policy: {0:?}")]
    UnknownPolicy(String),

    /// Free-form input that does not parse as a number.
    #[error("malformed input: {0:?} is not a valid number")]
    MalformedInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidFrameCount(-3);
        assert_eq!(format!("{}", err), "invalid frame count: -3 (must be >= 0)");

        let err = Error::UnknownPolicy("MRU".to_string());
        assert_eq!(format!("{}", err), "unknown replacement policy: \"MRU\"");

        let err = Error::MalformedInput("abc".to_string());
        assert_eq!(format!("{}", err), "malformed input: \"abc\" is not a valid number");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
