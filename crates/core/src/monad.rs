//! Chaining failure-producing functions

use crate::capability::Fallible;
use tracing::trace;

/// Feed the payload of `r` into `f` and return its container verbatim.
///
/// A failed `r` short-circuits: `f` is never called and the failure is
/// handed through unchanged.
pub fn bind<R, D, F>(r: R, f: F) -> D
where
    R: Fallible,
    D: Fallible<Failure = R::Failure>,
    F: FnOnce(R::Value) -> D,
{
    match r.into_result() {
        Ok(value) => f(value),
        Err(failure) => {
            trace!("bind short-circuited on failure");
            D::from_failure(failure)
        }
    }
}

/// Curried [`bind`]: lift `f` into a function between containers.
///
/// `bind_with(f)(r) == bind(r, f)`.
pub fn bind_with<R, D, F>(f: F) -> impl FnOnce(R) -> D
where
    R: Fallible,
    D: Fallible<Failure = R::Failure>,
    F: FnOnce(R::Value) -> D,
{
    move |r| bind(r, f)
}

/// [`bind`] for functions that answer in a different realization.
///
/// The container `f` returns is re-wrapped into `D` slot for slot, which is how
/// a plain std fallible function or a `(value, failure)` producer joins a chain.
pub fn bind_wrap<R, P, D, F>(r: R, f: F) -> D
where
    R: Fallible,
    P: Fallible<Failure = R::Failure>,
    D: Fallible<Value = P::Value, Failure = R::Failure>,
    F: FnOnce(R::Value) -> P,
{
    bind(r, |value| D::from_result(f(value).into_result()))
}

/// Kleisli composition: `a -> f(a) >>= g`.
///
/// Failures from `f` and from `g` surface the same way; `g` only runs when
/// `f` succeeded.
pub fn kleisli<A, RB, D, F, G>(f: F, g: G) -> impl Fn(A) -> D
where
    RB: Fallible,
    D: Fallible<Failure = RB::Failure>,
    F: Fn(A) -> RB,
    G: Fn(RB::Value) -> D,
{
    move |a| bind_with(&g)(f(a))
}
