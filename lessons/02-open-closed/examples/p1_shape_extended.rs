//! Pattern 1: Shape
//! Example: Extension - new shapes from outside the library
//!
//! Run with: cargo run --example p1_shape_extended

use std::f64::consts::PI;

use open_closed::shape::{AreaCalculator, Circle, Shape, Triangle};

// Neither of these types exists in the library. Implementing the trait is
// the only step needed to plug them into the existing calculator.

struct Ring {
    outer: f64,
    inner: f64,
}

impl Shape for Ring {
    fn area(&self) -> f64 {
        PI * (self.outer * self.outer - self.inner * self.inner)
    }

    fn info(&self) -> String {
        format!("Ring with radii {} and {}", self.outer, self.inner)
    }
}

struct Trapezoid {
    top: f64,
    bottom: f64,
    height: f64,
}

impl Shape for Trapezoid {
    fn area(&self) -> f64 {
        (self.top + self.bottom) / 2.0 * self.height
    }

    fn info(&self) -> String {
        format!(
            "Trapezoid with sides {} and {}, height {}",
            self.top, self.bottom, self.height
        )
    }
}

fn main() {
    // Usage: Library shapes and brand-new shapes mix freely.
    println!("=== OCP Extension: New Shapes, Old Calculator ===\n");

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(5.0)),
        Box::new(Triangle::new(3.0, 8.0)),
        Box::new(Ring {
            outer: 4.0,
            inner: 2.0,
        }),
        Box::new(Trapezoid {
            top: 3.0,
            bottom: 5.0,
            height: 2.0,
        }),
    ];

    for shape in &shapes {
        println!("{}: area = {:.2}", shape.info(), shape.area());
    }

    println!("\n{}", AreaCalculator::area_statistics(&shapes));

    println!("\n=== Key Points ===");
    println!("- Ring and Trapezoid were added without editing the library");
    println!("- The calculator code is closed, the shape set is open");
}
