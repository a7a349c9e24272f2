//! opkit Helper Tour
//!
//! This example walks through the three helper modules:
//! - Collection transformations (map, filter, reduce, chunk)
//! - Boolean-logic combinators (or, and, between, quantifiers)
//! - Variable helpers (swap, coalesce, lazy_load, clamp, rounding)

use opkit::prelude::*;

fn main() -> Result<(), OpkitError> {
    println!("{}", "=".repeat(80));
    println!("opkit Helper Tour");
    println!("{}", "=".repeat(80));
    println!();

    example_1_collections()?;
    example_2_conditions();
    example_3_variables()?;

    Ok(())
}

/// Example 1: Collection Transformations
/// Demonstrates lazy transformation, folding, and partitioning
fn example_1_collections() -> Result<(), OpkitError> {
    println!("Example 1: Collection Transformations");
    println!("{}", "-".repeat(80));

    let readings = vec![21.5, 22.1, 19.8, 25.3, 24.0, 20.7, 23.2];

    // Lazy map/filter: nothing runs until the collect
    let fahrenheit = map(readings.clone(), |c| c * 9.0 / 5.0 + 32.0);
    let warm: Vec<f64> = filter(fahrenheit, |f| *f > 70.0).collect();
    println!("Warm readings (F): {:?}", warm);

    let total = reduce(readings.clone(), |acc, c| acc + c, 0.0);
    println!("Sum of readings: {:.1}", total);

    // Partition into daily batches of 3; the final batch is shorter
    let batches = chunk(readings, 3)?;
    println!("Batches: {:?}", batches);

    // Control-flow helpers
    let mut ticks = 0;
    repeat(3, || ticks += 1);
    println!("Ticks after repeat(3): {}", ticks);

    println!();
    Ok(())
}

/// Example 2: Boolean-Logic Combinators
/// Demonstrates equality sets, ranges, and quantifiers
fn example_2_conditions() {
    println!("Example 2: Boolean-Logic Combinators");
    println!("{}", "-".repeat(80));

    let status = "active";
    println!(
        "status is live: {}",
        equals_any(&status, &["active", "degraded"])
    );

    let latency_ms = 245;
    println!(
        "latency acceptable: {}",
        between(latency_ms, 0, 300, Inclusive)
    );
    println!(
        "latency strictly interior: {}",
        in_range(latency_ms, 0, 245, Exclusive)
    );

    let codes = [200, 201, 204];
    println!("all successful: {}", all_match(codes, |c| c < 300));
    println!("any redirect: {}", any_match(codes, |c| (300..400).contains(&c)));
    println!("no server errors: {}", none_match(codes, |c| c >= 500));

    println!();
}

/// Example 3: Variable Helpers
/// Demonstrates in-place mutation, fallbacks, extrema, and rounding
fn example_3_variables() -> Result<(), OpkitError> {
    println!("Example 3: Variable Helpers");
    println!("{}", "-".repeat(80));

    let (mut primary, mut standby) = ("node-a", "node-b");
    swap(&mut primary, &mut standby);
    println!("After failover: primary={}, standby={}", primary, standby);

    let configured: Option<u16> = None;
    println!("Port: {}", default_if_none(configured, 8080));

    let sources = [None, Some("cache"), Some("disk")];
    println!("First available source: {:?}", coalesce(sources));

    let mut expensive: Option<String> = None;
    let value = lazy_load(&mut expensive, || {
        println!("  (computing once...)");
        String::from("ready")
    });
    println!("Lazy value: {}", value);

    let samples = vec![3.4, 1.1, 9.9, 4.2];
    let (lo, hi) = min_max(samples)?;
    println!("Sample range: [{}, {}]", lo, hi);

    println!("Clamped volume: {}", clamp(140, 0, 100));
    println!("Price on 0.05 grid: {:.2}", round_to_nearest(12.532, 0.05));

    println!();
    Ok(())
}
