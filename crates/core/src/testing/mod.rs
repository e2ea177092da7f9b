//! Property-based law suite shared by every container realization
//!
//! [`fallible_laws!`](crate::fallible_laws) expands to a proptest module that
//! checks the functor, monad, Kleisli, applicative and zip laws against one
//! realization. Instantiate it once per realization with a generic alias:
//!
//! ```rust
//! use outcome_core::testing::TestFailure;
//! use outcome_core::Outcome;
//!
//! type OutcomeOf<T> = Outcome<T, TestFailure>;
//! outcome_core::fallible_laws!(outcome_laws, OutcomeOf);
//! # fn main() {}
//! ```

use crate::capability::Fallible;

pub use proptest;

/// Failure value used by the suite.
///
/// Not `Clone`: a suite that compiles can only have moved failures around.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TestFailure(pub u32);

/// Blueprint for a container under test: its payload or its failure id
pub type Shape = Result<i32, u32>;

/// Property-based test generators
pub mod generators {
    use super::Shape;
    use proptest::prelude::*;

    /// Generate successful and failed blueprints in equal measure
    pub fn shape() -> impl Strategy<Value = Shape> {
        prop_oneof![any::<i32>().prop_map(Ok), any::<u32>().prop_map(Err)]
    }
}

/// Realize a blueprint as container `R`
pub fn build<R>(shape: &Shape) -> R
where
    R: Fallible<Value = i32, Failure = TestFailure>,
{
    match *shape {
        Ok(value) => R::from_value(value),
        Err(id) => R::from_failure(TestFailure(id)),
    }
}

/// What extracting a freshly built container must yield
pub fn expected(shape: &Shape) -> Result<i32, TestFailure> {
    shape.map_err(TestFailure)
}

/// Fails on odd input
pub fn halve<R>(x: i32) -> R
where
    R: Fallible<Value = i32, Failure = TestFailure>,
{
    if x % 2 == 0 {
        R::from_value(x / 2)
    } else {
        R::from_failure(TestFailure(x.unsigned_abs()))
    }
}

/// Fails on multiples of three
pub fn describe<R>(x: i32) -> R
where
    R: Fallible<Value = String, Failure = TestFailure>,
{
    if x % 3 == 0 {
        R::from_failure(TestFailure(3))
    } else {
        R::from_value(format!("<{x}>"))
    }
}

/// Fails on odd lengths
pub fn measure<R>(s: String) -> R
where
    R: Fallible<Value = usize, Failure = TestFailure>,
{
    if s.len() % 2 == 1 {
        R::from_failure(TestFailure(s.len() as u32))
    } else {
        R::from_value(s.len())
    }
}

/// Fails on short lengths
pub fn classify<R>(n: usize) -> R
where
    R: Fallible<Value = bool, Failure = TestFailure>,
{
    if n < 6 {
        R::from_failure(TestFailure(100 + n as u32))
    } else {
        R::from_value(n % 4 == 0)
    }
}

/// Expand the law suite for a realization given as a generic alias
/// `Alias<T>` whose failure type is [`TestFailure`].
#[macro_export]
macro_rules! fallible_laws {
    ($suite:ident, $container:ident) => {
        mod $suite {
            use super::$container;
            use $crate::testing::generators::shape;
            use $crate::testing::proptest::collection::vec;
            use $crate::testing::proptest::prelude::*;
            use $crate::testing::{
                build, classify, describe, expected, halve, measure, Shape, TestFailure,
            };
            use $crate::{applicative, collect, functor, monad, zip, Fallible};

            type Int = $container<i32>;
            type Wide = $container<i64>;
            type Text = $container<String>;
            type Size = $container<usize>;
            type Flag = $container<bool>;

            fn widen(x: i32) -> i64 {
                i64::from(x) * 2
            }

            fn difference(x: i32, y: i32) -> i64 {
                i64::from(x) - i64::from(y)
            }

            $crate::testing::proptest::proptest! {
                #[test]
                fn functor_identity(s in shape()) {
                    let mapped: Int = functor::map(build::<Int>(&s), |x| x);
                    prop_assert_eq!(mapped.into_result(), expected(&s));
                }

                #[test]
                fn functor_composition(s in shape()) {
                    let show = |y: i64| y.to_string();
                    let inner: Wide = functor::map(build::<Int>(&s), widen);
                    let stepwise: Text = functor::map(inner, show);
                    let fused: Text = functor::map(build::<Int>(&s), |x| show(widen(x)));
                    prop_assert_eq!(stepwise.into_result(), fused.into_result());
                }

                #[test]
                fn monad_left_identity(x in any::<i32>()) {
                    let bound: Int = monad::bind(<Int as Fallible>::from_value(x), halve::<Int>);
                    prop_assert_eq!(bound.into_result(), halve::<Int>(x).into_result());
                }

                #[test]
                fn monad_right_identity(s in shape()) {
                    let bound: Int = monad::bind(build::<Int>(&s), <Int as Fallible>::from_value);
                    prop_assert_eq!(bound.into_result(), expected(&s));
                }

                #[test]
                fn monad_associativity(s in shape()) {
                    let inner: Text = monad::bind(build::<Int>(&s), describe::<Text>);
                    let left: Size = monad::bind(inner, measure::<Size>);
                    let right: Size = monad::bind(build::<Int>(&s), |x| {
                        monad::bind(describe::<Text>(x), measure::<Size>)
                    });
                    prop_assert_eq!(left.into_result(), right.into_result());
                }

                #[test]
                fn kleisli_associativity(x in any::<i32>()) {
                    let left = monad::kleisli(
                        monad::kleisli(describe::<Text>, measure::<Size>),
                        classify::<Flag>,
                    );
                    let right = monad::kleisli(
                        describe::<Text>,
                        monad::kleisli(measure::<Size>, classify::<Flag>),
                    );
                    prop_assert_eq!(left(x).into_result(), right(x).into_result());
                }

                #[test]
                fn applicative_function_failure_wins(id in any::<u32>(), arg in shape()) {
                    let rf: Result<fn(i32) -> i64, TestFailure> = Err(TestFailure(id));
                    let applied: Wide = applicative::apply_to(rf, build::<Int>(&arg));
                    prop_assert_eq!(applied.into_result(), Err(TestFailure(id)));
                }

                #[test]
                fn applicative_value_behaves_as_map(arg in shape()) {
                    let rf: Result<fn(i32) -> i64, TestFailure> = Ok(widen);
                    let eager: Wide = applicative::apply_to(rf, build::<Int>(&arg));
                    let rf: Result<fn(i32) -> i64, TestFailure> = Ok(widen);
                    let curried: Wide = applicative::apply(rf)(build::<Int>(&arg));
                    prop_assert_eq!(eager.into_result(), expected(&arg).map(widen));
                    prop_assert_eq!(curried.into_result(), expected(&arg).map(widen));
                }

                #[test]
                fn zip_left_biased_precedence(a in shape(), b in shape()) {
                    let zipped: Text = zip::zip(build::<Int>(&a), build::<Int>(&b), |x, y| {
                        format!("{y}{x}")
                    });
                    let want = match (a, b) {
                        (Err(id), _) | (Ok(_), Err(id)) => Err(TestFailure(id)),
                        (Ok(x), Ok(y)) => Ok(format!("{y}{x}")),
                    };
                    prop_assert_eq!(zipped.into_result(), want);
                }

                #[test]
                fn zip_curried_matches_eager(a in shape(), b in shape()) {
                    let eager: Wide = zip::zip(build::<Int>(&a), build::<Int>(&b), difference);
                    let curried: Wide =
                        zip::zip_with(difference)(build::<Int>(&a))(build::<Int>(&b));
                    prop_assert_eq!(eager.into_result(), curried.into_result());
                }

                #[test]
                fn zip_r_returns_combiner_verbatim(a in shape(), b in shape()) {
                    let zipped: Int = zip::zip_r(build::<Int>(&a), build::<Int>(&b), |x, y| {
                        halve::<Int>(x.wrapping_add(y))
                    });
                    let want = match (a, b) {
                        (Err(id), _) | (Ok(_), Err(id)) => Err(TestFailure(id)),
                        (Ok(x), Ok(y)) => halve::<Int>(x.wrapping_add(y)).into_result(),
                    };
                    prop_assert_eq!(zipped.into_result(), want);
                }

                #[test]
                fn wrap_failure_dominates(value in any::<i32>(), id in any::<u32>()) {
                    let wrapped = <Int as Fallible>::wrap(value, Some(TestFailure(id)));
                    prop_assert_eq!(wrapped.into_result(), Err(TestFailure(id)));
                    let wrapped = <Int as Fallible>::wrap(value, None);
                    prop_assert_eq!(wrapped.into_result(), Ok(value));
                }

                #[test]
                fn value_or_discards_failure(s in shape(), default in any::<i32>()) {
                    let want = match s {
                        Ok(value) => value,
                        Err(_) => default,
                    };
                    prop_assert_eq!(<Int as Fallible>::value_or(build::<Int>(&s), default), want);
                }

                #[test]
                fn into_parts_populates_exactly_one_slot(s in shape()) {
                    let (value, failure) = build::<Int>(&s).into_parts();
                    prop_assert!(value.is_some() != failure.is_some());
                }

                #[test]
                fn sequence_surfaces_first_failure(shapes in vec(shape(), 0..16)) {
                    let collected: $container<Vec<i32>> =
                        collect::sequence(shapes.iter().map(build::<Int>));
                    let want: Result<Vec<i32>, TestFailure> =
                        shapes.iter().map(|s: &Shape| expected(s)).collect();
                    prop_assert_eq!(collected.into_result(), want);
                }
            }
        }
    };
}
