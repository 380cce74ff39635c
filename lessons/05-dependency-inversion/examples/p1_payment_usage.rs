//! Pattern 1: Payments
//! Example: Refactored - the gateway is injected through a trait
//!
//! Run with: cargo run --example p1_payment_usage

use dependency_inversion::payment::{
    BankCardPayment, OrderService, PayPalPayment, PaymentProcessor, StripePayment,
};

// A hand-written double: anything implementing the trait can stand in.
struct MockPaymentProcessor;

impl PaymentProcessor for MockPaymentProcessor {
    fn process(&self, amount: f64) -> bool {
        println!("[MOCK] Pretending to process {amount:.2} UAH");
        true
    }
}

fn main() {
    // Usage: The same service runs against any processor implementation.
    println!("=== Trying different payment gateways ===");

    println!("\n1. Paying through PayPal:");
    OrderService::new(PayPalPayment).process_order(100.0);

    println!("\n2. Paying through Stripe:");
    OrderService::new(StripePayment).process_order(200.0);

    println!("\n3. Paying with a bank card:");
    OrderService::new(BankCardPayment).process_order(150.0);

    println!("\n4. Testing with a mock:");
    OrderService::new(MockPaymentProcessor).process_order(500.0);
}
