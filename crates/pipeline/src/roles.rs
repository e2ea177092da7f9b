//! Function roles and the lifts between them
//!
//! Four shapes of unary function take part in a pipeline:
//!
//! - pure: `Fn(A) -> B`
//! - failure-producing: [`Step`], `Fn(A) -> Outcome<B, E>`
//! - failure-only consuming: [`Sink`], `Fn(A) -> Outcome<(), E>`
//! - side-effecting pure: `Fn(A)`
//!
//! Pure and side-effecting functions join a pipeline through [`lift`] and
//! [`lift0`]. The composers in [`compose`](crate::compose) accept steps in any
//! [`Fallible`](outcome_core::Fallible) realization directly; [`lift_result`]
//! and [`lift_pair`] normalize a single std or pair step to [`Outcome`].

use outcome_core::Outcome;

/// A failure-producing function, the basic building block of a pipeline
pub trait Step<A, B, E>: Fn(A) -> Outcome<B, E> {}

impl<A, B, E, T> Step<A, B, E> for T where T: Fn(A) -> Outcome<B, E> {}

/// A consumer that succeeds with nothing or fails
pub trait Sink<A, E>: Fn(A) -> Outcome<(), E> {}

impl<A, E, T> Sink<A, E> for T where T: Fn(A) -> Outcome<(), E> {}

/// Embed a pure function as a step that never fails
pub fn lift<A, B, E, F>(f: F) -> impl Step<A, B, E>
where
    F: Fn(A) -> B,
{
    move |a| Outcome::Ok(f(a))
}

/// Embed a side-effecting consumer as a sink that never fails
pub fn lift0<A, E, F>(f: F) -> impl Sink<A, E>
where
    F: Fn(A),
{
    move |a| {
        f(a);
        Outcome::Ok(())
    }
}

/// Embed a std fallible function as a step
pub fn lift_result<A, B, E, F>(f: F) -> impl Step<A, B, E>
where
    F: Fn(A) -> Result<B, E>,
{
    move |a| Outcome::from(f(a))
}

/// Embed a `(value, failure)` producer as a step; a present failure wins
pub fn lift_pair<A, B, E, F>(f: F) -> impl Step<A, B, E>
where
    F: Fn(A) -> (B, Option<E>),
{
    move |a| {
        let (value, failure) = f(a);
        Outcome::wrap(value, failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_lift_never_fails() {
        let step = lift::<_, _, &str, _>(|x: i32| x * 2);
        assert_eq!(step(21), Outcome::Ok(42));
    }

    #[test]
    fn test_lift0_runs_effect_and_succeeds() {
        let seen = Cell::new(0);
        let sink = lift0::<_, &str, _>(|x: i32| seen.set(x));
        assert_eq!(sink(7), Outcome::Ok(()));
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_lift_result_keeps_failure() {
        let parse = lift_result(|s: &str| s.parse::<u8>());
        assert_eq!(parse("12"), Outcome::Ok(12));
        assert!(parse("300").is_err());
    }

    #[test]
    fn test_lift_pair_failure_dominates_value() {
        let split = lift_pair(|s: &str| match s.split_once('=') {
            Some((key, _)) => (key.len(), None),
            None => (s.len(), Some("missing '='")),
        });
        assert_eq!(split("name=value"), Outcome::Ok(4));
        assert_eq!(split("name"), Outcome::Err("missing '='"));
    }
}
