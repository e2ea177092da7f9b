//! A value-or-failure container and the algebra for composing it.
//!
//! Call sites chain fallible computations without re-checking for failure after
//! every step. Failures are opaque: no combinator looks inside or clones
//! them, and every propagation path hands back the very failure it
//! received.
//!
//! ## Key Components
//!
//! - **`capability`**: The [`Fallible`] trait. Every combinator is written once
//!   against it, so all realizations obey the same laws.
//! - **`outcome`**: [`Outcome`], the tagged container, with the combinators as
//!   methods.
//! - **`bare`**: The same algebra over `(value, Option<failure>)` pairs.
//! - **`functor`**, **`monad`**, **`applicative`**, **`zip`**, **`perform`**:
//!   The combinator layers. Two-container operators always inspect the left
//!   operand first and never look at the right one once the left has failed.
//! - **`collect`**: Fail-fast `sequence` / `traverse`.
//! - **`errors`**: The crate's own [`Error`] for API misuse.

// Combinator layers are modules of free functions; realizations only add
// method sugar on top.
pub mod applicative;
pub mod bare;
pub mod capability;
pub mod collect;
pub mod errors;
pub mod functor;
pub mod monad;
pub mod outcome;
pub mod perform;
pub mod zip;

#[cfg(feature = "testing")]
pub mod testing;

pub use self::{
    capability::Fallible,
    errors::{Error, Result},
    monad::kleisli,
    outcome::Outcome,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::applicative::{apply, apply_to};
    pub use crate::collect::{sequence, traverse};
    pub use crate::functor::{fmap, map};
    pub use crate::monad::{bind, bind_with, bind_wrap, kleisli};
    pub use crate::perform::{perform, perform_e, perform_zip, perform_zip_e};
    pub use crate::zip::{zip, zip_e, zip_r, zip_with};
    pub use crate::{Fallible, Outcome};
}
