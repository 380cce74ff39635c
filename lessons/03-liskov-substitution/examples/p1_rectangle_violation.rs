//! Pattern 1: Rectangle and Square
//! Example: Violation - a square that pretends to be a rectangle
//!
//! Run with: cargo run --example p1_rectangle_violation

// The contract every implementor is expected to honor: set_width and
// set_height change their own dimension and nothing else.
trait MutableRectangle {
    fn set_width(&mut self, width: f64);
    fn set_height(&mut self, height: f64);
    fn area(&self) -> f64;
}

struct Rectangle {
    width: f64,
    height: f64,
}

impl MutableRectangle for Rectangle {
    fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

struct Square {
    side: f64,
}

// "A square is a rectangle", so the setters keep both sides equal - and
// silently break the contract callers rely on.
impl MutableRectangle for Square {
    fn set_width(&mut self, width: f64) {
        self.side = width;
    }

    fn set_height(&mut self, height: f64) {
        self.side = height;
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

// Written against MutableRectangle, correct for every honest implementor.
fn resize(rect: &mut dyn MutableRectangle) {
    rect.set_width(5.0);
    rect.set_height(4.0);
    println!("Expected area: 20, actual area: {}", rect.area());
}

fn main() {
    // Usage: The same call sequence gives different answers per type.
    println!("=== LSP Violation: Square As Rectangle ===\n");

    let mut rectangle = Rectangle {
        width: 2.0,
        height: 3.0,
    };
    print!("Rectangle -> ");
    resize(&mut rectangle);

    let mut square = Square { side: 10.0 };
    print!("Square    -> ");
    resize(&mut square); // prints 16: set_height overwrote the width

    println!("\n=== Key Points ===");
    println!("- Square satisfies the trait's signatures but not its meaning");
    println!("- Callers now need to know which concrete type they hold,");
    println!("  defeating the point of the abstraction");
    println!("- See p1_rectangle_usage for the independent-types version");
}
