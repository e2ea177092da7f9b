//! Error types for misuse of the container API
//!
//! The algebra never produces failures of its own: user failures travel inside
//! the containers untouched. This error only reports requests that cannot be
//! answered from a container's populated slot.

mod display;
mod types;

pub use types::{Error, Result};
