//! Pattern 1: Shape
//! Example: Refactored - the calculator works on any Shape implementation
//!
//! Run with: cargo run --example p1_shape_usage

use open_closed::shape::{AreaCalculator, Circle, Ellipse, Rectangle, Shape, Square, Triangle};

fn main() {
    // Usage: Heterogeneous shapes through one trait, no match anywhere.
    println!("=== OCP Refactored: One Trait, Many Shapes ===\n");

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(5.0)),
        Box::new(Rectangle::new(4.0, 6.0)),
        Box::new(Triangle::new(3.0, 8.0)),
        Box::new(Square::new(4.0)),
        Box::new(Ellipse::new(3.0, 2.0)),
    ];

    for shape in &shapes {
        println!("{}: area = {:.2}", shape.info(), shape.area());
    }

    println!("\n{}", AreaCalculator::area_statistics(&shapes));
}
