//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyPair => {
                write!(f, "pair holds neither a value nor a failure")
            }
            Error::ExpectedValue => {
                write!(f, "expected a value but the container holds a failure")
            }
            Error::ExpectedFailure => {
                write!(f, "expected a failure but the container holds a value")
            }
        }
    }
}
