//! Pattern 3: Checkout
//! Example: Two injected abstractions in one high-level service
//!
//! Run with: cargo run --example p3_checkout_usage

use dependency_inversion::logging::MemoryLogger;
use dependency_inversion::payment::PaymentProcessor;
use dependency_inversion::service::ServiceFactory;

// Test doubles defined right where the scenario needs them.
struct FixedOutcomeProcessor {
    accepts: bool,
}

impl PaymentProcessor for FixedOutcomeProcessor {
    fn process(&self, amount: f64) -> bool {
        println!("[TEST] Simulating a charge of {amount:.2} UAH");
        self.accepts
    }
}

fn main() {
    // Usage: Factories wire real configurations; doubles wire test ones.
    println!("=== Checkout with injected processor and logger ===");

    println!("\n1. Development configuration:");
    let dev = ServiceFactory::development();
    if dev.process_order("Ivan Petrenko", 1500.0).is_ok() {
        println!("Development order went through");
    }

    println!("\n2. Production configuration:");
    let prod = ServiceFactory::production();
    if prod.process_order("Maria Ivanenko", 2500.0).is_ok() {
        println!("Production order went through");
    }

    println!("\n3. Test configuration:");
    let logger = MemoryLogger::new();
    let test = ServiceFactory::custom(FixedOutcomeProcessor { accepts: true }, logger.clone());
    let result = test.process_order("Test Customer", 1000.0);
    println!("Result: {result:?}");
    println!("Captured {} log entries", logger.entries().len());

    println!("\n4. Declined payment:");
    let failing = ServiceFactory::custom(FixedOutcomeProcessor { accepts: false }, logger.clone());
    match failing.process_order("Unlucky Customer", 500.0) {
        Ok(()) => println!("Unexpected success"),
        Err(e) => println!("Checkout failed: {e}"),
    }

    println!("\n5. Invalid amount:");
    match failing.process_order("Confused Customer", 0.0) {
        Ok(()) => println!("Unexpected success"),
        Err(e) => println!("Checkout failed: {e}"),
    }

    println!("\n6. Refund:");
    let refunding = ServiceFactory::development();
    refunding.refund_order("Ivan Petrenko", 1500.0);
}
