//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports the whole helper surface for
//! convenient usage. The prelude should provide a one-stop import covering
//! all three helper modules, the error type, and the `Bounds` variants.
//!
//! ## Test Organization
//!
//! 1. **Collections** - Transformation helpers are accessible
//! 2. **Conditions** - Combinators and Bounds variants are accessible
//! 3. **Variables** - Variable helpers and the error type are accessible

use std::cell::Cell;

use opkit::prelude::*;

// ============================================================================
// Collections Exports
// ============================================================================

/// Test that the collections helpers work through the prelude.
#[test]
fn test_prelude_collections() {
    let doubled: Vec<i32> = map([1, 2], |n| n * 2).collect();
    assert_eq!(doubled, vec![2, 4]);

    let odds: Vec<i32> = filter(1..=4, |n| n % 2 == 1).collect();
    assert_eq!(odds, vec![1, 3]);

    assert_eq!(reduce([1, 2, 3], |acc, n| acc + n, 0), 6);
    assert_eq!(chunk(1..=4, 2).unwrap(), vec![vec![1, 2], vec![3, 4]]);

    let mut runs = 0;
    repeat(2, || runs += 1);
    assert_eq!(runs, 2);

    let budget = Cell::new(2);
    while_true(|| budget.get() > 0, || budget.set(budget.get() - 1));
    assert_eq!(budget.get(), 0);
}

// ============================================================================
// Conditions Exports
// ============================================================================

/// Test that the condition combinators work through the prelude.
#[test]
fn test_prelude_conditions() {
    assert!(or(&1, &[1, 2]));
    assert!(any_true([false, true]));
    assert!(and(Vec::<fn() -> bool>::new()));
    assert!(not(false));

    assert!(equals_any(&5, &[5]));
    assert!(equals_all(&5, &[5, 5]));
    assert!(in_set(&2, 1..=3));

    assert!(all_match([1, 2], |n| n > 0));
    assert!(any_match([1, 2], |n| n == 2));
    assert!(none_match([1, 2], |n| n > 9));
}

/// Test that the Bounds variants are exported unqualified.
#[test]
fn test_prelude_bounds_variants() {
    assert!(between(5, 1, 10, Inclusive));
    assert!(!between(1, 1, 10, Exclusive));
    assert!(in_range(5, 1, 10, Bounds::default()));
}

// ============================================================================
// Variables Exports
// ============================================================================

/// Test that the variable helpers and error type work through the prelude.
#[test]
fn test_prelude_variables() {
    let (mut a, mut b) = (1, 2);
    swap(&mut a, &mut b);
    assert_eq!((a, b), (2, 1));

    let mut flag = false;
    toggle(&mut flag);
    assert!(flag);

    assert_eq!(default_if_none(None, 3), 3);
    assert_eq!(coalesce([None, Some(4)]), Some(4));

    let mut slot: Option<i32> = None;
    assert_eq!(*lazy_load(&mut slot, || 5), 5);

    assert_eq!(min_max([2, 1]).unwrap(), (1, 2));
    assert_eq!(clamp(9, 0, 5), 5);
    assert!((round_to_nearest(7.3_f64, 0.5) - 7.5).abs() < 1e-12);

    let error: OpkitError = min_max(Vec::<i32>::new()).unwrap_err();
    assert_eq!(error, OpkitError::EmptySequence);
}
