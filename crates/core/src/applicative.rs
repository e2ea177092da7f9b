//! Applying a function that is itself held in a container

use crate::capability::Fallible;
use crate::functor;
use tracing::trace;

/// Apply the function held by `rf` to the payload of `ra`.
///
/// If `rf` failed its failure is returned and `ra` is dropped without being
/// inspected, even when `ra` succeeded. Otherwise this is [`functor::map`]
/// with the contained function.
pub fn apply_to<RF, RA, D, F>(rf: RF, ra: RA) -> D
where
    RF: Fallible<Value = F>,
    RA: Fallible<Failure = RF::Failure>,
    D: Fallible<Failure = RF::Failure>,
    F: FnOnce(RA::Value) -> D::Value,
{
    match rf.into_result() {
        Ok(f) => functor::map(ra, f),
        Err(failure) => {
            trace!("apply short-circuited on the function container");
            D::from_failure(failure)
        }
    }
}

/// Curried [`apply_to`]
pub fn apply<RF, RA, D, F>(rf: RF) -> impl FnOnce(RA) -> D
where
    RF: Fallible<Value = F>,
    RA: Fallible<Failure = RF::Failure>,
    D: Fallible<Failure = RF::Failure>,
    F: FnOnce(RA::Value) -> D::Value,
{
    move |ra| apply_to(rf, ra)
}
