//! # Dependency Inversion Principle
//!
//! High-level services depend on traits; concrete payment gateways and log
//! sinks are supplied from outside through constructor injection.
//!
//! ## Pattern 1: Payments
//! - `PaymentProcessor` trait with PayPal, Stripe and bank-card impls
//! - `OrderService` takes any processor at construction time
//!
//! ## Pattern 2: Logging
//! - `Logger` trait with console, file and remote impls
//! - `UserService` logs through whatever it was given
//! - `MemoryLogger` captures entries for assertions
//!
//! ## Pattern 3: Checkout
//! - `CheckoutService` combines an injected processor and logger
//! - `ServiceFactory` wires the common configurations
//!
//! Run any example with:
//! ```bash
//! cargo run --example <example_name>
//! ```

pub mod logging;
pub mod payment;
pub mod service;
