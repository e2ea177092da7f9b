//! Core error type definitions

/// Result type alias for container API operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for container API misuse using thiserror
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `(value, failure)` pair had neither slot populated
    EmptyPair,

    /// The success payload was requested from a failed container
    ExpectedValue,

    /// The failure was requested from a successful container
    ExpectedFailure,
}
