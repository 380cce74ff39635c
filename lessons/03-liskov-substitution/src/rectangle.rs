//! Rectangle and square as independent types behind a read-side trait.

pub trait Shape {
    fn area(&self) -> f64;
}

/// Width and height vary independently, as callers expect.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// One side, one setter. Not a rectangle and does not pretend to be.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    pub fn set_side(&mut self, side: f64) {
        self.side = side;
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

pub fn print_area(shape: &dyn Shape) {
    println!("Shape area: {}", shape.area());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_sides_vary_independently() {
        let mut rect = Rectangle::new(5.0, 4.0);
        rect.set_width(10.0);
        assert_eq!(rect.height(), 4.0);
        assert_eq!(rect.area(), 40.0);
    }

    #[test]
    fn test_square_area() {
        let mut square = Square::new(3.0);
        assert_eq!(square.area(), 9.0);
        square.set_side(7.0);
        assert_eq!(square.area(), 49.0);
    }

    #[test]
    fn test_both_substitute_for_shape() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle::new(3.0, 4.0)),
            Box::new(Square::new(5.0)),
            Box::new(Rectangle::new(2.0, 8.0)),
        ];
        let areas: Vec<f64> = shapes.iter().map(|s| s.area()).collect();
        assert_eq!(areas, vec![12.0, 25.0, 16.0]);
    }
}
