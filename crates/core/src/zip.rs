//! Combining two already-produced containers
//!
//! Every operator here follows the same precedence: `ra` is inspected first
//! and its failure returned without looking at `rb`; then `rb`; only when both
//! succeeded does the combiner run.

use crate::capability::Fallible;
use tracing::trace;

/// Combine two containers with a combiner that returns a container of its own.
/// The combiner's container is returned verbatim.
pub fn zip_r<RA, RB, D, F>(ra: RA, rb: RB, f: F) -> D
where
    RA: Fallible,
    RB: Fallible<Failure = RA::Failure>,
    D: Fallible<Failure = RA::Failure>,
    F: FnOnce(RA::Value, RB::Value) -> D,
{
    let a = match ra.into_result() {
        Ok(a) => a,
        Err(failure) => {
            trace!(side = "left", "zip short-circuited on failure");
            return D::from_failure(failure);
        }
    };
    let b = match rb.into_result() {
        Ok(b) => b,
        Err(failure) => {
            trace!(side = "right", "zip short-circuited on failure");
            return D::from_failure(failure);
        }
    };
    f(a, b)
}

/// Combine two containers with a pure binary function
pub fn zip<RA, RB, D, F>(ra: RA, rb: RB, f: F) -> D
where
    RA: Fallible,
    RB: Fallible<Failure = RA::Failure>,
    D: Fallible<Failure = RA::Failure>,
    F: FnOnce(RA::Value, RB::Value) -> D::Value,
{
    zip_r(ra, rb, |a, b| D::from_value(f(a, b)))
}

/// Combine two containers with a combiner answering in another realization,
/// e.g. a std fallible function or a `(value, failure)` producer.
pub fn zip_e<RA, RB, P, D, F>(ra: RA, rb: RB, f: F) -> D
where
    RA: Fallible,
    RB: Fallible<Failure = RA::Failure>,
    P: Fallible<Failure = RA::Failure>,
    D: Fallible<Value = P::Value, Failure = RA::Failure>,
    F: FnOnce(RA::Value, RB::Value) -> P,
{
    zip_r(ra, rb, |a, b| D::from_result(f(a, b).into_result()))
}

/// Curried [`zip`]: `zip_with(f)(ra)(rb) == zip(ra, rb, f)`.
///
/// The second stage is boxed so it can be stored or passed on before `rb`
/// exists.
pub fn zip_with<'a, RA, RB, D, F>(f: F) -> impl FnOnce(RA) -> Box<dyn FnOnce(RB) -> D + 'a>
where
    RA: Fallible + 'a,
    RB: Fallible<Failure = RA::Failure> + 'a,
    D: Fallible<Failure = RA::Failure> + 'a,
    F: FnOnce(RA::Value, RB::Value) -> D::Value + 'a,
{
    move |ra| -> Box<dyn FnOnce(RB) -> D + 'a> { Box::new(move |rb: RB| zip(ra, rb, f)) }
}
