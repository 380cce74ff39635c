//! Pattern 1: Shape
//! Example: Violation - every new shape edits every match block
//!
//! Run with: cargo run --example p1_shape_violation

use std::f64::consts::PI;

enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Triangle { base: f64, height: f64 },
}

struct AreaCalculator;

impl AreaCalculator {
    // Adding a shape means editing this match...
    fn area(shape: &Shape) -> f64 {
        match shape {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Rectangle { width, height } => width * height,
            Shape::Triangle { base, height } => base * height / 2.0,
        }
    }

    // ...and this one, and every other match over Shape in the codebase.
    fn info(shape: &Shape) -> String {
        match shape {
            Shape::Circle { radius } => format!("Circle with radius {radius}"),
            Shape::Rectangle { width, height } => format!("Rectangle {width}x{height}"),
            Shape::Triangle { base, height } => {
                format!("Triangle with base {base} and height {height}")
            }
        }
    }

    fn total_area(shapes: &[Shape]) -> f64 {
        shapes.iter().map(Self::area).sum()
    }
}

fn main() {
    // Usage: Works today, but every new shape modifies existing code.
    println!("=== OCP Violation: Match Blocks Everywhere ===\n");

    let shapes = [
        Shape::Circle { radius: 5.0 },
        Shape::Rectangle {
            width: 4.0,
            height: 6.0,
        },
        Shape::Triangle {
            base: 3.0,
            height: 8.0,
        },
    ];

    for shape in &shapes {
        println!(
            "{}: area = {:.2}",
            AreaCalculator::info(shape),
            AreaCalculator::area(shape)
        );
    }
    println!("Total area: {:.2}", AreaCalculator::total_area(&shapes));

    println!("\n=== Key Points ===");
    println!("- A Square variant would force edits to area(), info() and");
    println!("  every other match over Shape");
    println!("- The calculator knows the internals of every shape");
    println!("- See p1_shape_usage for the trait-based version");
}
