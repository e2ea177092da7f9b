//! Fail-fast folding over many containers

use crate::capability::Fallible;
use tracing::trace;

/// Map every item through `f`, collecting the payloads in order.
///
/// Stops pulling items at the first failure and returns it unchanged; later
/// items are never passed to `f`.
pub fn traverse<I, R, D, F>(items: I, mut f: F) -> D
where
    I: IntoIterator,
    R: Fallible,
    D: Fallible<Value = Vec<R::Value>, Failure = R::Failure>,
    F: FnMut(I::Item) -> R,
{
    let mut values = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match f(item).into_result() {
            Ok(value) => values.push(value),
            Err(failure) => {
                trace!(index, "traverse stopped at first failure");
                return D::from_failure(failure);
            }
        }
    }
    D::from_value(values)
}

/// Turn a sequence of containers into a container of a sequence
pub fn sequence<I, R, D>(items: I) -> D
where
    I: IntoIterator<Item = R>,
    R: Fallible,
    D: Fallible<Value = Vec<R::Value>, Failure = R::Failure>,
{
    traverse(items, |r| r)
}
