//! Shapes behind a common trait so the calculator never matches on a type.

use std::f64::consts::PI;

pub trait Shape {
    fn area(&self) -> f64;
    fn info(&self) -> String;
}

pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn info(&self) -> String {
        format!("Circle with radius {}", self.radius)
    }
}

pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn info(&self) -> String {
        format!("Rectangle {}x{}", self.width, self.height)
    }
}

pub struct Triangle {
    base: f64,
    height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        self.base * self.height / 2.0
    }

    fn info(&self) -> String {
        format!("Triangle with base {} and height {}", self.base, self.height)
    }
}

pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn info(&self) -> String {
        format!("Square with side {}", self.side)
    }
}

pub struct Ellipse {
    semi_major: f64,
    semi_minor: f64,
}

impl Ellipse {
    pub fn new(semi_major: f64, semi_minor: f64) -> Self {
        Self {
            semi_major,
            semi_minor,
        }
    }
}

impl Shape for Ellipse {
    fn area(&self) -> f64 {
        PI * self.semi_major * self.semi_minor
    }

    fn info(&self) -> String {
        format!(
            "Ellipse with semi-axes {} and {}",
            self.semi_major, self.semi_minor
        )
    }
}

/// Works on any shape through the trait. Adding a shape never changes it.
pub struct AreaCalculator;

impl AreaCalculator {
    pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
        shapes.iter().map(|shape| shape.area()).sum()
    }

    pub fn area_statistics(shapes: &[Box<dyn Shape>]) -> String {
        if shapes.is_empty() {
            return "No shapes".to_string();
        }
        let total = Self::total_area(shapes);
        let count = shapes.len();
        let average = total / count as f64;
        format!(
            "Total area: {total:.2}, Shapes: {count}, Average area: {average:.2}"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_to(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-2
    }

    #[test]
    fn test_circle_area() {
        assert!(close_to(Circle::new(5.0).area(), 78.54));
    }

    #[test]
    fn test_rectangle_area() {
        assert_eq!(Rectangle::new(4.0, 6.0).area(), 24.0);
    }

    #[test]
    fn test_triangle_area() {
        assert_eq!(Triangle::new(3.0, 8.0).area(), 12.0);
    }

    #[test]
    fn test_square_area() {
        assert_eq!(Square::new(4.0).area(), 16.0);
    }

    #[test]
    fn test_ellipse_area() {
        assert!(close_to(Ellipse::new(3.0, 2.0).area(), 6.0 * PI));
    }

    #[test]
    fn test_total_area_over_mixed_shapes() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle::new(4.0, 6.0)),
            Box::new(Triangle::new(3.0, 8.0)),
            Box::new(Square::new(4.0)),
        ];
        assert_eq!(AreaCalculator::total_area(&shapes), 52.0);
    }

    #[test]
    fn test_statistics_formatting() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle::new(4.0, 6.0)),
            Box::new(Triangle::new(3.0, 8.0)),
        ];
        assert_eq!(
            AreaCalculator::area_statistics(&shapes),
            "Total area: 36.00, Shapes: 2, Average area: 18.00"
        );
    }

    #[test]
    fn test_statistics_with_no_shapes() {
        assert_eq!(AreaCalculator::area_statistics(&[]), "No shapes");
    }
}
