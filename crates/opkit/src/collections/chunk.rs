//! Fixed-size partitioning.
//!
//! ## Purpose
//!
//! Splits a sequence into consecutive groups of a fixed size, with a shorter
//! final group when the length is not a multiple of the chunk size.
//!
//! ## Design notes
//!
//! * **Eager**: the source is materialized once and its length computed once
//!   to drive the loop bound. Sources that can only be iterated once are
//!   therefore fine here.
//! * **Validated**: a zero chunk size cannot make progress and is rejected
//!   before any element is consumed.
//!
//! ## Invariants
//!
//! * Concatenating the groups in order reproduces the input exactly.
//! * Every group except possibly the last has exactly `chunk_size` elements.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::OpkitError;

/// Partition `collection` into consecutive groups of `chunk_size` elements.
///
/// The final group may be smaller when the sequence length is not a multiple
/// of `chunk_size`. Fails with [`OpkitError::InvalidChunkSize`] when
/// `chunk_size` is zero.
pub fn chunk<I>(collection: I, chunk_size: usize) -> Result<Vec<Vec<I::Item>>, OpkitError>
where
    I: IntoIterator,
{
    if chunk_size == 0 {
        return Err(OpkitError::InvalidChunkSize { got: chunk_size });
    }

    let items: Vec<I::Item> = collection.into_iter().collect();

    // Length is computed once and drives the loop bound; the groups are
    // moved out of the buffer without re-walking it.
    let groups = items.len().div_ceil(chunk_size);
    let mut chunks = Vec::with_capacity(groups);
    let mut items = items.into_iter();

    for _ in 0..groups {
        chunks.push(items.by_ref().take(chunk_size).collect());
    }

    Ok(chunks)
}
