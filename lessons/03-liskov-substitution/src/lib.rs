//! # Liskov Substitution Principle
//!
//! Anywhere a trait object is expected, every implementation must behave as
//! the trait's contract promises. Both patterns show a subtype that breaks
//! the contract, then a design where no contract exists to break.
//!
//! ## Pattern 1: Rectangle and Square
//! - Violation: a "square is-a rectangle" whose setters silently couple
//!   width and height, surprising code written against the rectangle
//! - Refactored: independent `Rectangle` and `Square` types sharing only a
//!   read-side `Shape` trait
//!
//! ## Pattern 2: Birds
//! - Violation: a `Bird` contract with `fly`, which penguins can only
//!   satisfy by returning an error at runtime
//! - Refactored: `Animal`, `Flyable` and `Swimmable` capability traits, so
//!   a penguin that cannot fly is a compile error, not a runtime one
//!
//! Run any example with:
//! ```bash
//! cargo run --example <example_name>
//! ```

pub mod bird;
pub mod rectangle;
