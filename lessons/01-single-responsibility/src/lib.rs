//! # Single Responsibility Principle
//!
//! A type should have exactly one reason to change. This crate splits two
//! "god objects" into focused collaborators:
//!
//! ## Pattern 1: User
//! - `User` only stores profile data
//! - `UserValidator` only checks the data
//! - `UserRepository` only talks to the (simulated) database
//! - `UserFormatter` only renders display and JSON output
//!
//! ## Pattern 2: Order
//! - `Order` only manages line items and the customer address
//! - `OrderCalculator` only computes totals and tax
//! - `OrderEmailService` only sends the confirmation message
//! - `OrderLogger` only writes the audit line
//!
//! The `*_violation` examples show the single-class versions for contrast. Run any example with:
//! ```bash
//! cargo run --example <example_name>
//! ```

pub mod order;
pub mod user;
