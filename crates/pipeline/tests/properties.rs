//! Algebraic properties of pipeline composition

use outcome_pipeline::prelude::*;
use quickcheck::QuickCheck;
use std::cell::Cell;

type Out<T> = Outcome<T, String>;

fn halve(x: i64) -> Out<i64> {
    if x % 2 == 0 {
        Outcome::Ok(x / 2)
    } else {
        Outcome::Err(format!("odd: {x}"))
    }
}

fn shrink(x: i64) -> Out<i64> {
    if x.unsigned_abs() < 1000 {
        Outcome::Ok(x - 7)
    } else {
        Outcome::Err(format!("too large: {x}"))
    }
}

fn label(x: i64) -> Out<String> {
    if x % 3 == 0 {
        Outcome::Err(format!("multiple of three: {x}"))
    } else {
        Outcome::Ok(format!("#{x}"))
    }
}

type Pair<T> = (T, Option<String>);

fn halve_pair(x: i64) -> Pair<i64> {
    halve(x).into_pair()
}

fn shrink_pair(x: i64) -> Pair<i64> {
    shrink(x).into_pair()
}

fn label_pair(x: i64) -> Pair<String> {
    label(x).into_pair()
}

fn chain_is_associative(x: i64) -> bool {
    let left = chain(chain(halve, shrink), label);
    let right = chain(halve, chain(shrink, label));
    left(x) == right(x)
}

fn pair_chain_is_associative(x: i64) -> bool {
    let left = chain(chain(halve_pair, shrink_pair), label_pair);
    let right = chain(halve_pair, chain(shrink_pair, label_pair));
    left(x) == right(x)
}

fn pair_steps_agree_with_outcome_steps(x: i64) -> bool {
    let bare = chain(chain(halve_pair, shrink_pair), label_pair);
    let mixed = chain(chain(halve, shrink_pair), label);
    let wrapped = chain(chain(halve, shrink), label);
    bare(x) == wrapped(x) && mixed(x) == wrapped(x)
}

fn map_is_chain_after_lift(x: i64) -> bool {
    let square = |y: i64| y.wrapping_mul(y);
    map(halve, square)(x) == chain(halve, lift(square))(x)
}

fn perform0_is_perform_after_lift0(x: i64) -> bool {
    let seen = Cell::new(None);
    let direct = perform0(shrink, |y| seen.set(Some(y)))(x);
    let direct_seen = seen.take();
    let lifted = perform(shrink, lift0(|y| seen.set(Some(y))))(x);
    direct == lifted && direct_seen == seen.get()
}

fn failing_first_step_skips_second(x: i64) -> bool {
    let calls = Cell::new(0);
    let pipeline = chain(halve, |y| {
        calls.set(calls.get() + 1);
        shrink(y)
    });
    let outcome = pipeline(x);
    if x % 2 == 0 {
        calls.get() == 1 && outcome == shrink(x / 2)
    } else {
        calls.get() == 0 && outcome == Outcome::Err(format!("odd: {x}"))
    }
}

fn zip_matches_nested_chain(a: i64, c: i64) -> bool {
    let zipped = zip(halve, shrink, |b, d| label(b + d));
    let nested = halve(a).bind(|b| shrink(c).bind(|d| label(b + d)));
    zipped(a, c) == nested
}

#[test]
fn test_chain_associativity() {
    QuickCheck::new().quickcheck(chain_is_associative as fn(i64) -> bool);
}

#[test]
fn test_pair_chain_associativity() {
    QuickCheck::new().quickcheck(pair_chain_is_associative as fn(i64) -> bool);
}

#[test]
fn test_pair_steps_agree_with_outcome_steps() {
    QuickCheck::new().quickcheck(pair_steps_agree_with_outcome_steps as fn(i64) -> bool);
}

#[test]
fn test_map_equals_chain_of_lift() {
    QuickCheck::new().quickcheck(map_is_chain_after_lift as fn(i64) -> bool);
}

#[test]
fn test_perform0_equals_perform_of_lift0() {
    QuickCheck::new().quickcheck(perform0_is_perform_after_lift0 as fn(i64) -> bool);
}

#[test]
fn test_chain_short_circuits() {
    QuickCheck::new().quickcheck(failing_first_step_skips_second as fn(i64) -> bool);
}

#[test]
fn test_zip_agrees_with_nested_bind() {
    QuickCheck::new().quickcheck(zip_matches_nested_chain as fn(i64, i64) -> bool);
}

#[test]
fn test_chain_macro_matches_nested_chain() {
    let flat = outcome_pipeline::chain!(halve, shrink, label);
    let nested = chain(chain(halve, shrink), label);
    for x in [-12, 0, 4, 7, 20, 4000] {
        assert_eq!(flat(x), nested(x));
    }
}
