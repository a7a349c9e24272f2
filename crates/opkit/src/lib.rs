//! # opkit: everyday helpers for collections, conditions, and variables
//!
//! A small, dependency-light toolbox of generic convenience functions:
//! sequence transformations (map/filter/reduce/chunk), boolean-logic
//! combinators (or/and/between/in-set), and single-variable helpers
//! (swap/clamp/coalesce/lazy-init/min-max/round). Every function is
//! stateless and synchronous; nothing persists crate-side between calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use opkit::prelude::*;
//!
//! // Lazy sequence transformations
//! let doubled: Vec<i32> = map([1, 2, 3], |n| n * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let evens: Vec<i32> = filter(1..=6, |n| n % 2 == 0).collect();
//! assert_eq!(evens, vec![2, 4, 6]);
//!
//! // Folding and partitioning
//! let total = reduce([1, 2, 3], |acc, n| acc + n, 0);
//! assert_eq!(total, 6);
//!
//! let groups = chunk(1..=7, 3)?;
//! assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
//! # Result::<(), OpkitError>::Ok(())
//! ```
//!
//! ```rust
//! use opkit::prelude::*;
//!
//! // Boolean combinators
//! assert!(between(5, 1, 10, Inclusive));
//! assert!(!between(1, 1, 10, Exclusive));
//! assert!(equals_any(&"yes", &["yes", "y"]));
//! assert!(all_match([2, 4, 6], |n| n % 2 == 0));
//!
//! // Variable helpers
//! let (mut a, mut b) = (1, 2);
//! swap(&mut a, &mut b);
//! assert_eq!((a, b), (2, 1));
//!
//! assert_eq!(clamp(15, 0, 10), 10);
//! assert_eq!(min_max([3, 1, 2])?, (1, 3));
//! # Result::<(), OpkitError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Only two operations can fail, and both return a `Result`:
//!
//! - [`collections::chunk`] rejects a zero chunk size with
//!   [`OpkitError::InvalidChunkSize`].
//! - [`variables::min_max`] rejects an empty sequence with
//!   [`OpkitError::EmptySequence`].
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use opkit::prelude::*;
//!
//! let (lo, hi) = min_max(vec![4.0, 1.5, 9.0])?;
//! assert_eq!((lo, hi), (1.5, 9.0));
//! # Result::<(), OpkitError>::Ok(())
//! ```
//!
//! Every other function is total over its documented input domain. One
//! arithmetic edge is passed through rather than caught:
//! [`variables::round_to_nearest`] with a zero increment divides by zero and
//! yields a NaN/infinity-class float, exactly as IEEE 754 division does.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! opkit = { version = "0.1", default-features = false }
//! ```
//!
//! Only [`collections::chunk`] allocates (it materializes its groups); the
//! rest of the surface is allocation-free and usable with `alloc` alone.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Sequence transformation and control-flow helpers.
pub mod collections;

// Boolean-logic combinators over values, predicates, and ranges.
pub mod conditions;

// Single-variable manipulation helpers.
pub mod variables;

// Publicly re-exported error type.
pub use primitives::errors::OpkitError;

// Standard opkit prelude.
pub mod prelude {
    pub use crate::collections::{chunk, filter, map, reduce, repeat, while_true};
    pub use crate::conditions::{
        Bounds,
        Bounds::{Exclusive, Inclusive},
        all_match, and, any_match, any_true, between, equals_all, equals_any, in_range, in_set,
        none_match, not, or,
    };
    pub use crate::primitives::errors::OpkitError;
    pub use crate::variables::{
        clamp, coalesce, default_if_none, lazy_load, min_max, round_to_nearest, swap, toggle,
    };
}
