//! Lifting pure functions over containers

use crate::capability::Fallible;

/// Apply `f` to the payload of `r`, or hand its failure through unchanged.
///
/// Satisfies `map(r, identity) == r` and
/// `map(map(r, f), g) == map(r, |x| g(f(x)))`.
pub fn map<R, D, F>(r: R, f: F) -> D
where
    R: Fallible,
    D: Fallible<Failure = R::Failure>,
    F: FnOnce(R::Value) -> D::Value,
{
    match r.into_result() {
        Ok(value) => D::from_value(f(value)),
        Err(failure) => D::from_failure(failure),
    }
}

/// Curried [`map`]: lift `f` into a function between containers
pub fn fmap<R, D, F>(f: F) -> impl FnOnce(R) -> D
where
    R: Fallible,
    D: Fallible<Failure = R::Failure>,
    F: FnOnce(R::Value) -> D::Value,
{
    move |r| map(r, f)
}
