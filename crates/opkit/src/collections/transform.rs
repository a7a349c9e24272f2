//! Lazy mapping, filtering, and left folds.
//!
//! ## Purpose
//!
//! Thin adapters over the standard iterator combinators, accepting anything
//! iterable rather than a concrete container type.
//!
//! ## Design notes
//!
//! * **Laziness**: [`map`] and [`filter`] return views; the supplied closure
//!   runs only as the output is consumed.
//! * **Single-use**: the returned iterators are consumed by iteration.
//!   Re-iterating requires a source that can be iterated again.
//!
//! ## Invariants
//!
//! * [`map`] yields exactly one output element per input element, in order.
//! * [`filter`] preserves the relative order of retained elements.
//! * [`reduce`] returns `initial_value` unchanged for an empty input.

// ============================================================================
// Lazy Adapters
// ============================================================================

/// Transform each element of `collection` with `transform`.
///
/// Returns a lazy iterator with the same length and order as the input;
/// `transform` is not invoked until the result is consumed.
#[inline]
pub fn map<I, F, U>(collection: I, transform: F) -> impl Iterator<Item = U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    collection.into_iter().map(transform)
}

/// Keep exactly the elements of `collection` for which `predicate` is true.
///
/// Returns a lazy iterator preserving the relative order of the retained
/// elements; `predicate` is not invoked until the result is consumed.
#[inline]
pub fn filter<I, F>(collection: I, predicate: F) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    collection.into_iter().filter(predicate)
}

// ============================================================================
// Folds
// ============================================================================

/// Fold `collection` left-to-right into a single value.
///
/// Each step computes `acc = accumulator(acc, item)`, starting from
/// `initial_value`. An empty input returns `initial_value` unchanged.
#[inline]
pub fn reduce<I, A, F>(collection: I, accumulator: F, initial_value: A) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    collection.into_iter().fold(initial_value, accumulator)
}
