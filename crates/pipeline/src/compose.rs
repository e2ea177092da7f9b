//! Composition operators over function roles
//!
//! ```text
//! step + step = step   chain
//! step + pure = step   map
//! step + sink = sink   perform
//! step + fn() = sink   perform0
//! ```
//!
//! Binary forms run two steps side by side on separate inputs and hand both
//! payloads to a combiner ([`zip`]) or a binary sink ([`merge`]). The left step
//! always runs first; the right step is skipped once the left has failed.
//!
//! Steps may answer in any [`Fallible`] realization: an [`Outcome`], a std
//! `Result` or a `(value, Option<failure>)` pair all join a pipeline as they
//! are. Composed pipelines answer in [`Outcome`] and are plain `Fn` values
//! that can be called any number of times.

use crate::roles::{lift, lift0, Sink, Step};
use outcome_core::{Fallible, Outcome};
use tracing::trace;

/// Run `f`, then feed its payload to `g`
pub fn chain<A, RB, RC, F, G>(f: F, g: G) -> impl Step<A, RC::Value, RB::Failure>
where
    RB: Fallible,
    RC: Fallible<Failure = RB::Failure>,
    F: Fn(A) -> RB,
    G: Fn(RB::Value) -> RC,
{
    move |a| match f(a).into_result() {
        Ok(b) => Outcome::from(g(b).into_result()),
        Err(failure) => {
            trace!(stage = "chain", "pipeline short-circuited");
            Outcome::Err(failure)
        }
    }
}

/// Run `f`, then transform its payload with the pure `g`
pub fn map<A, RB, C, F, G>(f: F, g: G) -> impl Step<A, C, RB::Failure>
where
    RB: Fallible,
    F: Fn(A) -> RB,
    G: Fn(RB::Value) -> C,
{
    chain(f, lift::<_, _, RB::Failure, _>(g))
}

/// Run `f`, then hand its payload to the sink `g`
pub fn perform<A, RB, RS, F, G>(f: F, g: G) -> impl Sink<A, RB::Failure>
where
    RB: Fallible,
    RS: Fallible<Value = (), Failure = RB::Failure>,
    F: Fn(A) -> RB,
    G: Fn(RB::Value) -> RS,
{
    chain(f, g)
}

/// Run `f`, then hand its payload to a consumer that cannot fail
pub fn perform0<A, RB, F, G>(f: F, g: G) -> impl Sink<A, RB::Failure>
where
    RB: Fallible,
    F: Fn(A) -> RB,
    G: Fn(RB::Value),
{
    perform(f, lift0::<_, RB::Failure, _>(g))
}

/// Run `f` on the first input and `g` on the second, then combine both
/// payloads with `with`.
///
/// `g` is not called when `f` failed.
pub fn zip<A, C, RB, RD, RZ, F, G, W>(
    f: F,
    g: G,
    with: W,
) -> impl Fn(A, C) -> Outcome<RZ::Value, RB::Failure>
where
    RB: Fallible,
    RD: Fallible<Failure = RB::Failure>,
    RZ: Fallible<Failure = RB::Failure>,
    F: Fn(A) -> RB,
    G: Fn(C) -> RD,
    W: Fn(RB::Value, RD::Value) -> RZ,
{
    move |a, c| {
        let b = match f(a).into_result() {
            Ok(b) => b,
            Err(failure) => {
                trace!(stage = "zip", side = "left", "pipeline short-circuited");
                return Outcome::Err(failure);
            }
        };
        match g(c).into_result() {
            Ok(d) => Outcome::from(with(b, d).into_result()),
            Err(failure) => {
                trace!(stage = "zip", side = "right", "pipeline short-circuited");
                Outcome::Err(failure)
            }
        }
    }
}

/// [`zip`] into a binary sink: the result succeeds with nothing or fails
pub fn merge<A, C, RB, RD, RS, F, G, W>(
    f: F,
    g: G,
    with: W,
) -> impl Fn(A, C) -> Outcome<(), RB::Failure>
where
    RB: Fallible,
    RD: Fallible<Failure = RB::Failure>,
    RS: Fallible<Value = (), Failure = RB::Failure>,
    F: Fn(A) -> RB,
    G: Fn(C) -> RD,
    W: Fn(RB::Value, RD::Value) -> RS,
{
    zip(f, g, with)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn parse(s: &str) -> Outcome<i32, String> {
        s.parse().map_err(|_| format!("not a number: {s}")).into()
    }

    fn positive(x: i32) -> Outcome<u32, String> {
        if x > 0 {
            Outcome::Ok(x as u32)
        } else {
            Outcome::Err(format!("not positive: {x}"))
        }
    }

    #[rstest]
    #[case::ok("42", Outcome::Ok(42))]
    #[case::f_fails("x", Outcome::Err("not a number: x".to_string()))]
    #[case::g_fails("-1", Outcome::Err("not positive: -1".to_string()))]
    fn test_chain(#[case] input: &str, #[case] expected: Outcome<u32, String>) {
        assert_eq!(chain(parse, positive)(input), expected);
    }

    #[test]
    fn test_chain_skips_second_step_on_failure() {
        let calls = Cell::new(0);
        let pipeline = chain(parse, |x| {
            calls.set(calls.get() + 1);
            positive(x)
        });
        assert_eq!(pipeline("nope"), Outcome::Err("not a number: nope".to_string()));
        assert_eq!(calls.get(), 0);
        assert_eq!(pipeline("3"), Outcome::Ok(3));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_is_chain_after_lift() {
        let doubled = map(parse, |x| x * 2);
        assert_eq!(doubled("21"), Outcome::Ok(42));
        assert!(doubled("?").is_err());
    }

    #[test]
    fn test_perform_and_perform0() {
        let total = Cell::new(0);
        let add = perform(parse, |x| {
            total.set(total.get() + x);
            Outcome::Ok(())
        });
        assert_eq!(add("5"), Outcome::Ok(()));
        assert!(add("five").is_err());
        assert_eq!(total.get(), 5);

        let seen = Cell::new(0);
        let record = perform0(parse, |x| seen.set(x));
        assert_eq!(record("9"), Outcome::Ok(()));
        assert_eq!(seen.get(), 9);
    }

    #[rstest]
    #[case::both_fail("a", "b", Outcome::Err("not a number: a".to_string()), 0)]
    #[case::left_fails("a", "2", Outcome::Err("not a number: a".to_string()), 0)]
    #[case::right_fails("1", "b", Outcome::Err("not a number: b".to_string()), 1)]
    #[case::both_succeed("1", "2", Outcome::Ok(3), 1)]
    fn test_zip_precedence(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Outcome<i32, String>,
        #[case] right_calls: u32,
    ) {
        let calls = Cell::new(0);
        let counted = |s: &str| {
            calls.set(calls.get() + 1);
            parse(s)
        };
        let sum = zip(parse, counted, |a, b| Outcome::Ok(a + b));
        assert_eq!(sum(left, right), expected);
        assert_eq!(calls.get(), right_calls);
    }

    #[test]
    fn test_merge_sink_failure_surfaces() {
        let compare = merge(parse, parse, |a, b| {
            if a == b {
                Outcome::Ok(())
            } else {
                Outcome::Err(format!("{a} != {b}"))
            }
        });
        assert_eq!(compare("4", "4"), Outcome::Ok(()));
        assert_eq!(compare("4", "5"), Outcome::Err("4 != 5".to_string()));
        assert_eq!(compare("x", "5"), Outcome::Err("not a number: x".to_string()));
    }

    fn parse_pair(s: &str) -> (i32, Option<String>) {
        match s.parse() {
            Ok(x) => (x, None),
            Err(_) => (0, Some(format!("not a number: {s}"))),
        }
    }

    fn positive_result(x: i32) -> Result<u32, String> {
        u32::try_from(x)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| format!("not positive: {x}"))
    }

    #[rstest]
    #[case::ok("42", Outcome::Ok(42))]
    #[case::f_fails("x", Outcome::Err("not a number: x".to_string()))]
    #[case::g_fails("-1", Outcome::Err("not positive: -1".to_string()))]
    fn test_chain_across_realizations(
        #[case] input: &str,
        #[case] expected: Outcome<u32, String>,
    ) {
        assert_eq!(chain(parse_pair, positive)(input), expected);
        assert_eq!(chain(parse, positive_result)(input), expected);
        assert_eq!(chain(parse_pair, positive_result)(input), expected);
    }

    #[test]
    fn test_zip_of_pair_steps_with_result_combiner() {
        let ratio = zip(parse_pair, parse_pair, |a, b| {
            a.checked_div(b).ok_or_else(|| "division by zero".to_string())
        });
        assert_eq!(ratio("9", "3"), Outcome::Ok(3));
        assert_eq!(ratio("9", "0"), Outcome::Err("division by zero".to_string()));
        assert_eq!(ratio("q", "0"), Outcome::Err("not a number: q".to_string()));
    }
}
