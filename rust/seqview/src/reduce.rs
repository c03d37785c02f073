//! Left folds over views.
//!
//! These are terminal consumers, not adaptors: each call walks its input
//! once, front to back, combining strictly left to right. The combiner must
//! be pure; it is invoked exactly `len - 1` times by the unseeded variants
//! and `len` times by [`reduce_with_seed`].
//!
//! The unseeded and seeded variants deliberately disagree on a
//! single-element input: `reduce([a], f) == a`, while
//! `reduce_with_seed([a], seed, f) == f(seed, a)`.

/// Folds `items` left to right, seeding the accumulator with the first item.
///
/// Returns `None` for an empty input.
///
/// ```
/// use seqview::{reduce, SequenceView};
///
/// let values = [1, 2, 3, 4];
/// let view = SequenceView::new(&values);
/// assert_eq!(reduce(view.iter().copied(), |a, b| a + b), Some(10));
/// assert_eq!(reduce(std::iter::empty::<i32>(), |a, b| a + b), None);
/// ```
#[doc(alias = "creduce")]
pub fn reduce<I, F>(items: I, combine: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let mut iter = items.into_iter();
    let first = iter.next()?;
    Some(iter.fold(first, combine))
}

/// Like [`reduce`], but an empty input produces `Default::default()`.
///
/// Use this only when the default value is a meaningful result for "no
/// elements" (e.g. `0` for a sum); otherwise prefer [`reduce`], which keeps
/// the two cases apart.
pub fn reduce_or_default<I, F>(items: I, combine: F) -> I::Item
where
    I: IntoIterator,
    I::Item: Default,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    reduce(items, combine).unwrap_or_default()
}

/// Folds `items` left to right starting from `seed`.
///
/// An empty input returns `seed` unchanged.
pub fn reduce_with_seed<I, A, F>(items: I, seed: A, combine: F) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    items.into_iter().fold(seed, combine)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_reduce_single() {
        assert_eq!(reduce([7], |a, b| a * b), Some(7));
    }

    #[test]
    fn test_reduce_is_left_associative() {
        let joined = reduce(["a", "b", "c"].map(String::from), |acc, s| {
            format!("({acc}{s})")
        });
        assert_eq!(joined.as_deref(), Some("((ab)c)"));
        assert_eq!(reduce([100, 10, 1], |a, b| a - b), Some(89));
    }

    #[test]
    fn test_reduce_empty() {
        let empty: Vec<i64> = vec![];
        assert_eq!(reduce(empty.iter().copied(), |a, b| a + b), None);
        assert_eq!(reduce_or_default(empty.iter().copied(), |a, b| a + b), 0);
        assert_eq!(reduce_with_seed(&empty, 42, |acc, x| acc + x), 42);
    }

    #[test]
    fn test_seeded_and_unseeded_differ() {
        let values = [5];
        assert_eq!(reduce(values, |a, b| a + b), Some(5));
        assert_eq!(reduce_with_seed(values, 1, |a, b| a + b), 6);
    }

    #[test]
    fn test_seed_of_other_type() {
        let words = ["alpha", "be", "c"];
        let total = reduce_with_seed(&words, 0usize, |acc, w| acc + w.len());
        assert_eq!(total, 8);
    }

    #[test]
    fn test_combiner_call_counts() {
        let calls = Cell::new(0);
        let values = [1, 2, 3, 4];
        let _ = reduce(values, |a, b| {
            calls.set(calls.get() + 1);
            a + b
        });
        assert_eq!(calls.get(), 3);
        calls.set(0);
        let _ = reduce_with_seed(values, 0, |a, b| {
            calls.set(calls.get() + 1);
            a + b
        });
        assert_eq!(calls.get(), 4);
    }
}
