//! The bare pair convention: `(value, Option<failure>)` without a wrapper type
//!
//! These functions mirror the [`Outcome`](crate::Outcome) API for code that
//! already traffics in pairs. A failed pair carries `T::default()` as its
//! value, which is never read; a pair whose failure slot is `Some` counts as
//! failed whatever its value holds. Failure-only results are `Option<E>`.

use crate::capability::Fallible;
use crate::{applicative, collect, functor, monad};

/// A value and a failure travelling together
pub type Pair<T, E> = (T, Option<E>);

pub fn ok<T, E>(value: T) -> Pair<T, E> {
    (value, None)
}

pub fn err<T: Default, E>(failure: E) -> Pair<T, E> {
    (T::default(), Some(failure))
}

/// Normalize a raw pair: a present failure zeroes the value
pub fn wrap<T: Default, E>(value: T, failure: Option<E>) -> Pair<T, E> {
    <Pair<T, E> as Fallible>::wrap(value, failure)
}

pub fn value_or<T: Default, E>(pair: Pair<T, E>, default: T) -> T {
    pair.value_or(default)
}

pub fn map<T, U, E, F>(pair: Pair<T, E>, f: F) -> Pair<U, E>
where
    T: Default,
    U: Default,
    F: FnOnce(T) -> U,
{
    functor::map(pair, f)
}

/// Curried [`map`] taking the two slots as separate arguments
pub fn fmap<T, U, E, F>(f: F) -> impl FnOnce(T, Option<E>) -> Pair<U, E>
where
    T: Default,
    U: Default,
    F: FnOnce(T) -> U,
{
    move |value, failure| map((value, failure), f)
}

pub fn bind<T, U, E, F>(pair: Pair<T, E>, f: F) -> Pair<U, E>
where
    T: Default,
    U: Default,
    F: FnOnce(T) -> Pair<U, E>,
{
    monad::bind(pair, f)
}

/// [`bind`] for std fallible functions
pub fn bind_result<T, U, E, F>(pair: Pair<T, E>, f: F) -> Pair<U, E>
where
    T: Default,
    U: Default,
    F: FnOnce(T) -> Result<U, E>,
{
    monad::bind_wrap(pair, f)
}

pub fn kleisli<A, B, C, E, F, G>(f: F, g: G) -> impl Fn(A) -> Pair<C, E>
where
    B: Default,
    C: Default,
    F: Fn(A) -> Pair<B, E>,
    G: Fn(B) -> Pair<C, E>,
{
    monad::kleisli(f, g)
}

/// Apply a function pair to an argument pair.
///
/// The function slot of a failed function pair is never called; its failure
/// wins even over a successful argument.
pub fn apply_to<A, B, E, F>(func: Pair<F, E>, arg: Pair<A, E>) -> Pair<B, E>
where
    A: Default,
    B: Default,
    F: FnOnce(A) -> B,
{
    let (f, failure) = func;
    applicative::apply_to(<Result<F, E> as Fallible>::wrap(f, failure), arg)
}

/// Curried [`apply_to`]
pub fn apply<A, B, E, F>(func: Pair<F, E>) -> impl FnOnce(Pair<A, E>) -> Pair<B, E>
where
    A: Default,
    B: Default,
    F: FnOnce(A) -> B,
{
    move |arg| apply_to(func, arg)
}

pub fn zip<A, B, C, E, F>(a: Pair<A, E>, b: Pair<B, E>, f: F) -> Pair<C, E>
where
    A: Default,
    B: Default,
    C: Default,
    F: FnOnce(A, B) -> C,
{
    crate::zip::zip(a, b, f)
}

pub fn zip_r<A, B, C, E, F>(a: Pair<A, E>, b: Pair<B, E>, f: F) -> Pair<C, E>
where
    A: Default,
    B: Default,
    C: Default,
    F: FnOnce(A, B) -> Pair<C, E>,
{
    crate::zip::zip_r(a, b, f)
}

/// [`zip_r`] with a std fallible combiner
pub fn zip_e<A, B, C, E, F>(a: Pair<A, E>, b: Pair<B, E>, f: F) -> Pair<C, E>
where
    A: Default,
    B: Default,
    C: Default,
    F: FnOnce(A, B) -> Result<C, E>,
{
    crate::zip::zip_e(a, b, f)
}

/// Curried [`zip`]
pub fn zip_with<'a, A, B, C, E, F>(
    f: F,
) -> impl FnOnce(Pair<A, E>) -> Box<dyn FnOnce(Pair<B, E>) -> Pair<C, E> + 'a>
where
    A: Default + 'a,
    B: Default + 'a,
    C: Default + 'a,
    E: 'a,
    F: FnOnce(A, B) -> C + 'a,
{
    crate::zip::zip_with::<Pair<A, E>, Pair<B, E>, Pair<C, E>, F>(f)
}

pub fn perform<T, E, F>(pair: Pair<T, E>, f: F) -> Option<E>
where
    T: Default,
    F: FnOnce(T),
{
    crate::perform::perform::<_, Result<(), E>, _>(pair, f).err()
}

pub fn perform_e<T, E, F>(pair: Pair<T, E>, f: F) -> Option<E>
where
    T: Default,
    F: FnOnce(T) -> Option<E>,
{
    let consumer = |value| f(value).map_or(Ok(()), Err);
    crate::perform::perform_e::<_, Result<(), E>, _>(pair, consumer).err()
}

pub fn perform_zip<A, B, E, F>(a: Pair<A, E>, b: Pair<B, E>, f: F) -> Option<E>
where
    A: Default,
    B: Default,
    F: FnOnce(A, B),
{
    crate::perform::perform_zip::<_, _, Result<(), E>, _>(a, b, f).err()
}

pub fn perform_zip_e<A, B, E, F>(a: Pair<A, E>, b: Pair<B, E>, f: F) -> Option<E>
where
    A: Default,
    B: Default,
    F: FnOnce(A, B) -> Option<E>,
{
    let consumer = |x, y| f(x, y).map_or(Ok(()), Err);
    crate::perform::perform_zip_e::<_, _, Result<(), E>, _>(a, b, consumer).err()
}

/// Collect pairs into a pair of `Vec`, stopping at the first failure
pub fn sequence<T, E, I>(pairs: I) -> Pair<Vec<T>, E>
where
    T: Default,
    I: IntoIterator<Item = Pair<T, E>>,
{
    collect::sequence(pairs)
}
