//! Method syntax for building pipelines left to right

use crate::compose;
use crate::roles::{Sink, Step};
use outcome_core::Fallible;

/// Pipeline composition as methods on any step, whatever realization it
/// answers in
pub trait StepExt<A, R: Fallible>: Fn(A) -> R + Sized {
    /// [`compose::chain`]
    fn chain<G, RC>(self, g: G) -> impl Step<A, RC::Value, R::Failure>
    where
        RC: Fallible<Failure = R::Failure>,
        G: Fn(R::Value) -> RC,
    {
        compose::chain(self, g)
    }

    /// [`compose::map`]
    fn and_map<G, C>(self, g: G) -> impl Step<A, C, R::Failure>
    where
        G: Fn(R::Value) -> C,
    {
        compose::map(self, g)
    }

    /// [`compose::perform`]
    fn perform<G, RS>(self, g: G) -> impl Sink<A, R::Failure>
    where
        RS: Fallible<Value = (), Failure = R::Failure>,
        G: Fn(R::Value) -> RS,
    {
        compose::perform(self, g)
    }

    /// [`compose::perform0`]
    fn perform0<G>(self, g: G) -> impl Sink<A, R::Failure>
    where
        G: Fn(R::Value),
    {
        compose::perform0(self, g)
    }
}

impl<T, A, R> StepExt<A, R> for T
where
    R: Fallible,
    T: Fn(A) -> R,
{
}
