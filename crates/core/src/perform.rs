//! Running consumers on container payloads
//!
//! The results are failure-only containers (`Value = ()`): they succeed with
//! nothing or carry the first failure met. A consumer is never invoked on a
//! failed input.

use crate::capability::Fallible;
use crate::{functor, monad, zip};

/// Run a consumer that cannot fail on the payload of `r`
pub fn perform<R, D, F>(r: R, f: F) -> D
where
    R: Fallible,
    D: Fallible<Value = (), Failure = R::Failure>,
    F: FnOnce(R::Value),
{
    functor::map(r, f)
}

/// Run a consumer that may fail on the payload of `r`
pub fn perform_e<R, D, F>(r: R, f: F) -> D
where
    R: Fallible,
    D: Fallible<Value = (), Failure = R::Failure>,
    F: FnOnce(R::Value) -> D,
{
    monad::bind(r, f)
}

/// Run a binary consumer once both payloads are available, `ra` first
pub fn perform_zip<RA, RB, D, F>(ra: RA, rb: RB, f: F) -> D
where
    RA: Fallible,
    RB: Fallible<Failure = RA::Failure>,
    D: Fallible<Value = (), Failure = RA::Failure>,
    F: FnOnce(RA::Value, RB::Value),
{
    zip::zip(ra, rb, f)
}

/// Run a binary consumer that may fail once both payloads are available
pub fn perform_zip_e<RA, RB, D, F>(ra: RA, rb: RB, f: F) -> D
where
    RA: Fallible,
    RB: Fallible<Failure = RA::Failure>,
    D: Fallible<Value = (), Failure = RA::Failure>,
    F: FnOnce(RA::Value, RB::Value) -> D,
{
    zip::zip_r(ra, rb, f)
}
