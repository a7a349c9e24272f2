//! Sequence transformation and control-flow helpers.
//!
//! # Purpose
//!
//! This module wraps the common sequence operations (mapping, filtering,
//! folding, and partitioning) together with two small control-flow helpers
//! for repeated execution.
//!
//! # Design notes
//!
//! * **Lazy where possible**: [`map`] and [`filter`] return iterator
//!   adapters; no work happens until the result is consumed.
//! * **Eager where required**: [`chunk`] materializes its input once to
//!   drive the partition loop, and [`reduce`] consumes its input fully.
//! * **Order-preserving**: every helper visits and yields elements in the
//!   input order.

/// Lazy mapping, filtering, and left folds.
mod transform;

/// Repeated and conditional execution.
mod control;

/// Fixed-size partitioning.
mod chunk;

pub use chunk::chunk;
pub use control::{repeat, while_true};
pub use transform::{filter, map, reduce};
