//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared building blocks used by the rest of the
//! crate. It has zero internal dependencies within the crate.
//!
//! The helper modules above it ([`crate::collections`], [`crate::conditions`],
//! [`crate::variables`]) are independent leaves: none of them depends on
//! another, and all of them may depend on this layer.

/// Shared error types.
pub mod errors;
