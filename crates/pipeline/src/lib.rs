//! A small calculus for composing failure-producing functions
//!
//! Steps are plain functions `A -> Outcome<B, E>`. The operators in
//! [`compose`] glue them into larger steps without a single failure check at
//! the call site: the first step to fail ends the pipeline and its failure is
//! what the whole pipeline returns.
//!
//! ```rust
//! use outcome_pipeline::prelude::*;
//!
//! let parse = lift_result(|s: &str| s.trim().parse::<i32>());
//! let double = map(parse, |x| x * 2);
//! assert_eq!(double(" 21 ").value_or(0), 42);
//! assert!(double("x").is_err());
//!
//! // Steps answering in a std `Result` or a `(value, failure)` pair join as-is
//! let halve = |x: i32| if x % 2 == 0 { (x / 2, None) } else { (0, Some("odd")) };
//! let quarter = chain(halve, halve);
//! assert_eq!(quarter(12), Outcome::Ok(3));
//! assert_eq!(quarter(6), Outcome::Err("odd"));
//! ```
//!
//! ## Key Components
//!
//! - **`roles`**: The [`Step`] and [`Sink`] roles and the lifts into them.
//! - **`compose`**: `chain`, `map`, `perform`, `perform0`, `zip`, `merge`.
//! - **`ext`**: The same operators as methods via [`StepExt`].

pub mod compose;
pub mod ext;
pub mod roles;

pub use self::{
    compose::{chain, map, merge, perform, perform0, zip},
    ext::StepExt,
    roles::{lift, lift0, lift_pair, lift_result, Sink, Step},
};
pub use outcome_core::Outcome;

/// Chain any number of steps left to right.
///
/// `chain!(f, g, h)` is `chain(chain(f, g), h)`; associativity makes the
/// grouping irrelevant to the result.
#[macro_export]
macro_rules! chain {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $g:expr $(, $rest:expr)* $(,)?) => {
        $crate::chain!($crate::compose::chain($f, $g) $(, $rest)*)
    };
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compose::{chain, map, merge, perform, perform0, zip};
    pub use crate::ext::StepExt;
    pub use crate::roles::{lift, lift0, lift_pair, lift_result, Sink, Step};
    pub use outcome_core::{Fallible, Outcome};
}
