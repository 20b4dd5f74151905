//! Demo driver: exercises the generic holders, the shape types, and both
//! comparers with literal sample values.
//!
//! Run with: cargo run --bin demo

use std::cmp::Ordering;

use colored::Colorize;
use shape_compare::{
    ordering_label, AreaComparator, Circle, Comparator, Holder, NumericHolder, RadiusComparator,
    Square,
};

/// Pure description of a comparison outcome; the caller decides where it goes.
fn verdict(a: &str, b: &str, outcome: Ordering) -> String {
    format!("{} is {} {}", a, ordering_label(outcome), b)
}

fn main() {
    println!("{}", "=== Generic Holders ===".bold());
    let count = Holder::new(33);
    let greeting = Holder::new("Hello, world!");
    println!("{count}");
    println!("{greeting}");

    let measured = NumericHolder::new(2.5f64);
    println!("{} (as f64: {})", measured, measured.as_f64());

    println!("\n{}", "=== Shapes ===".bold());
    let square = Square::new(2.0);
    let circle = Circle::new(1.0);
    println!("{square}");
    println!("{circle}");

    println!("\n{}", "=== Comparing shapes by area ===".bold());
    let by_area = AreaComparator;
    let area_outcomes = [
        (
            "square(2)",
            "circle(1)",
            by_area.compare(Some(&square), Some(&circle)),
        ),
        (
            "circle(1)",
            "circle(1)",
            by_area.compare(Some(&circle), Some(&circle)),
        ),
        ("(absent)", "circle(1)", by_area.compare(None, Some(&circle))),
        ("(absent)", "(absent)", by_area.compare(None, None)),
    ];
    for (a, b, outcome) in area_outcomes {
        println!("{}", verdict(a, b, outcome).green());
    }

    println!("\n{}", "=== Comparing circles by radius ===".bold());
    let by_radius = RadiusComparator;
    let small = Circle::new(1.0);
    let big = Circle::new(3.0);
    let radius_outcomes = [
        (
            "circle(1)",
            "circle(3)",
            by_radius.compare(Some(&small), Some(&big)),
        ),
        (
            "circle(1)",
            "circle(1)",
            by_radius.compare(Some(&small), Some(&small)),
        ),
        ("circle(3)", "(absent)", by_radius.compare(Some(&big), None)),
    ];
    for (a, b, outcome) in radius_outcomes {
        println!("{}", verdict(a, b, outcome).green());
    }
}
