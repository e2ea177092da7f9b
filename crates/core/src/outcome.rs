//! The wrapped value-or-failure container

use crate::capability::Fallible;
use crate::errors::{Error, Result};
use crate::{applicative, monad, perform, zip};

/// A value of type `T` or an opaque failure of type `E`.
///
/// Other ecosystems call this `Either`, `StatusOr` or `expected`. Unlike
/// `std::result::Result` it carries the combinator algebra of this crate as
/// inherent methods, and every combinator hands a failure through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may hold a failure that should be handled"]
pub enum Outcome<T, E> {
    /// Success, holding the payload
    Ok(T),
    /// Failure, holding the opaque failure value
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Construct a successful outcome
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Construct a failed outcome.
    ///
    /// `T` cannot be inferred from the failure, so call sites usually spell it
    /// out: `Outcome::<u32, _>::err(e)`.
    pub fn err(failure: E) -> Self {
        Outcome::Err(failure)
    }

    /// Construct from a `(value, failure)` pair; a present failure wins
    pub fn wrap(value: T, failure: Option<E>) -> Self {
        <Self as Fallible>::wrap(value, failure)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Both slots; exactly one is `Some`
    pub fn into_parts(self) -> (Option<T>, Option<E>) {
        <Self as Fallible>::into_parts(self)
    }

    /// Convert to the bare pair convention, zeroing the value of a failure
    pub fn into_pair(self) -> (T, Option<E>)
    where
        T: Default,
    {
        match self {
            Outcome::Ok(value) => (value, None),
            Outcome::Err(failure) => (T::default(), Some(failure)),
        }
    }

    /// The payload, or `default` if this outcome failed
    pub fn value_or(self, default: T) -> T {
        <Self as Fallible>::value_or(self, default)
    }

    /// Borrow the payload
    pub fn value(&self) -> Result<&T> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(_) => Err(Error::ExpectedValue),
        }
    }

    /// Borrow the failure
    pub fn failure(&self) -> Result<&E> {
        match self {
            Outcome::Ok(_) => Err(Error::ExpectedFailure),
            Outcome::Err(failure) => Ok(failure),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Apply a pure function to the payload
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        crate::functor::map(self, f)
    }

    /// Chain a function that may itself fail
    pub fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        monad::bind(self, f)
    }

    /// Chain a std fallible function
    pub fn bind_result<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> std::result::Result<U, E>,
    {
        monad::bind_wrap(self, f)
    }

    /// Chain a function returning a `(value, failure)` pair
    pub fn bind_pair<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> (U, Option<E>),
    {
        monad::bind(self, |value| {
            let (value, failure) = f(value);
            Outcome::wrap(value, failure)
        })
    }

    /// Combine with another outcome through a pure binary function.
    ///
    /// `self` is inspected first; its failure wins over `other`'s.
    pub fn zip<U, V, F>(self, other: Outcome<U, E>, f: F) -> Outcome<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        zip::zip(self, other, f)
    }

    /// Like [`zip`](Outcome::zip) with a combiner that may fail
    pub fn zip_r<U, V, F>(self, other: Outcome<U, E>, f: F) -> Outcome<V, E>
    where
        F: FnOnce(T, U) -> Outcome<V, E>,
    {
        zip::zip_r(self, other, f)
    }

    /// Like [`zip_r`](Outcome::zip_r) with a combiner returning any realization
    pub fn zip_e<U, P, F>(self, other: Outcome<U, E>, f: F) -> Outcome<P::Value, E>
    where
        P: Fallible<Failure = E>,
        F: FnOnce(T, U) -> P,
    {
        zip::zip_e(self, other, f)
    }

    /// Run a side effect on the payload
    pub fn perform<F>(self, f: F) -> Outcome<(), E>
    where
        F: FnOnce(T),
    {
        perform::perform(self, f)
    }

    /// Run a side effect that may fail on the payload
    pub fn perform_e<F>(self, f: F) -> Outcome<(), E>
    where
        F: FnOnce(T) -> Outcome<(), E>,
    {
        perform::perform_e(self, f)
    }
}

impl<F, E> Outcome<F, E> {
    /// Apply the contained function to `arg`.
    ///
    /// A failed function container wins even when `arg` succeeded; `arg` is
    /// then dropped uninspected.
    pub fn apply_to<A, B>(self, arg: Outcome<A, E>) -> Outcome<B, E>
    where
        F: FnOnce(A) -> B,
    {
        applicative::apply_to(self, arg)
    }

    /// Curried [`apply_to`](Outcome::apply_to)
    pub fn apply<A, B>(self) -> impl FnOnce(Outcome<A, E>) -> Outcome<B, E>
    where
        F: FnOnce(A) -> B,
    {
        applicative::apply(self)
    }
}

impl<T, E> Fallible for Outcome<T, E> {
    type Value = T;
    type Failure = E;

    fn from_value(value: T) -> Self {
        Outcome::Ok(value)
    }

    fn from_failure(failure: E) -> Self {
        Outcome::Err(failure)
    }

    fn into_result(self) -> std::result::Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(failure) => Err(failure),
        }
    }

    fn is_ok(&self) -> bool {
        Outcome::is_ok(self)
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> TryFrom<(Option<T>, Option<E>)> for Outcome<T, E> {
    type Error = Error;

    fn try_from(parts: (Option<T>, Option<E>)) -> Result<Self> {
        match parts {
            (_, Some(failure)) => Ok(Outcome::Err(failure)),
            (Some(value), None) => Ok(Outcome::Ok(value)),
            (None, None) => Err(Error::EmptyPair),
        }
    }
}

/// Collect outcomes, stopping at the first failure
impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(std::result::Result::from)
            .collect::<std::result::Result<V, E>>()
            .into()
    }
}
