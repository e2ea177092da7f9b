//! The container capability every realization implements
//!
//! A realization is any type that can hold exactly one of a success payload or
//! an opaque failure. All combinators in this crate are written once against
//! [`Fallible`] and let the caller pick the realization of the output, so the
//! wrapped [`Outcome`](crate::Outcome), the bare `(T, Option<E>)` pair and
//! `std::result::Result` obey identical laws by construction.

/// Construction and extraction for a value-or-failure container.
///
/// Implementations must keep exactly one slot meaningful: a container built by
/// [`from_failure`](Fallible::from_failure) never yields a value from
/// [`into_result`](Fallible::into_result), and vice versa.
pub trait Fallible: Sized {
    /// Success payload type
    type Value;

    /// Opaque failure type, never inspected by the algebra
    type Failure;

    /// Build a container in the success state
    fn from_value(value: Self::Value) -> Self;

    /// Build a container in the failure state
    fn from_failure(failure: Self::Failure) -> Self;

    /// Consume the container, moving out whichever slot is populated
    fn into_result(self) -> Result<Self::Value, Self::Failure>;

    /// Whether the success slot is the populated one
    fn is_ok(&self) -> bool;

    /// Build a container from a std `Result`
    fn from_result(result: Result<Self::Value, Self::Failure>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(failure) => Self::from_failure(failure),
        }
    }

    /// Build a container from a `(value, failure)` pair.
    ///
    /// A present failure always wins and `value` is dropped unread.
    fn wrap(value: Self::Value, failure: Option<Self::Failure>) -> Self {
        match failure {
            Some(failure) => Self::from_failure(failure),
            None => Self::from_value(value),
        }
    }

    /// Split into both slots; exactly one of them is `Some`
    fn into_parts(self) -> (Option<Self::Value>, Option<Self::Failure>) {
        match self.into_result() {
            Ok(value) => (Some(value), None),
            Err(failure) => (None, Some(failure)),
        }
    }

    /// The payload, or `default` when the container failed.
    ///
    /// The failure is dropped without being looked at.
    fn value_or(self, default: Self::Value) -> Self::Value {
        match self.into_result() {
            Ok(value) => value,
            Err(_) => default,
        }
    }
}

impl<T, E> Fallible for Result<T, E> {
    type Value = T;
    type Failure = E;

    fn from_value(value: T) -> Self {
        Ok(value)
    }

    fn from_failure(failure: E) -> Self {
        Err(failure)
    }

    fn into_result(self) -> Result<T, E> {
        self
    }

    fn is_ok(&self) -> bool {
        Result::is_ok(self)
    }
}

/// The bare pair convention: `(value, failure)` travelling together.
///
/// A failed pair carries `T::default()` in its value slot, which is never read
/// back. A pair whose failure slot is `Some` is failed regardless of the value.
impl<T: Default, E> Fallible for (T, Option<E>) {
    type Value = T;
    type Failure = E;

    fn from_value(value: T) -> Self {
        (value, None)
    }

    fn from_failure(failure: E) -> Self {
        (T::default(), Some(failure))
    }

    fn into_result(self) -> Result<T, E> {
        let (value, failure) = self;
        match failure {
            Some(failure) => Err(failure),
            None => Ok(value),
        }
    }

    fn is_ok(&self) -> bool {
        self.1.is_none()
    }
}
