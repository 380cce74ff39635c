//! Pattern 1: Rectangle and Square
//! Example: Refactored - independent types behind a read-side trait
//!
//! Run with: cargo run --example p1_rectangle_usage

use liskov_substitution::rectangle::{print_area, Rectangle, Shape, Square};

fn main() {
    // Usage: Both types substitute for Shape; mutation stays type-specific.
    println!("=== LSP Refactored: Honest Shapes ===\n");

    let mut rectangle = Rectangle::new(5.0, 4.0);
    let mut square = Square::new(3.0);

    print_area(&rectangle); // 20
    print_area(&square); // 9

    println!("\n--- Working with the rectangle ---");
    println!("Initial size: {}x{}", rectangle.width(), rectangle.height());
    rectangle.set_width(10.0);
    rectangle.set_height(2.0);
    println!("New size: {}x{}", rectangle.width(), rectangle.height());
    println!("Area: {}", rectangle.area());

    println!("\n--- Working with the square ---");
    println!("Initial side: {}", square.side());
    square.set_side(7.0);
    println!("New side: {}", square.side());
    println!("Area: {}", square.area());

    // Mixed collection through the shared trait
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(3.0, 4.0)),
        Box::new(Square::new(5.0)),
        Box::new(Rectangle::new(2.0, 8.0)),
        Box::new(Square::new(6.0)),
    ];

    println!("\n--- Areas of mixed shapes ---");
    for (index, shape) in shapes.iter().enumerate() {
        println!("Shape {}: area = {}", index + 1, shape.area());
    }
}
