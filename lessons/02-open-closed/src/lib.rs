//! # Open/Closed Principle
//!
//! Code should be open for extension and closed for modification. Both
//! patterns in this crate replace a grow-forever `match` with a trait that
//! new code implements without touching old code.
//!
//! ## Pattern 1: Shape
//! - `Shape` trait with `area` and `info`
//! - Circle, rectangle, triangle, square and ellipse implementations
//! - `AreaCalculator` works on `&dyn Shape` and never names a concrete type
//!
//! ## Pattern 2: Discount
//! - `DiscountStrategy` trait
//! - No-discount, premium, VIP (tenure-based) and student (capped) strategies
//! - `Customer` holds exactly one strategy and can swap it at runtime
//! - `DiscountCalculator` prices any customer through the trait
//!
//! The `*_extended` examples add new shapes and strategies from outside the
//! library, which is the whole point. Run any example with:
//! ```bash
//! cargo run --example <example_name>
//! ```

pub mod discount;
pub mod shape;
