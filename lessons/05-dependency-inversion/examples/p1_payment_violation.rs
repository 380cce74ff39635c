//! Pattern 1: Payments
//! Example: Violation - the service constructs its own gateway
//!
//! Run with: cargo run --example p1_payment_violation

struct PayPalPayment;

impl PayPalPayment {
    fn process_payment(&self, amount: f64) -> bool {
        println!("Processing {amount:.2} UAH through PayPal");
        true
    }
}

// Hard-wired to one gateway. Adding Stripe means rewriting this service,
// and tests cannot substitute a double.
struct OrderService {
    processor: PayPalPayment,
}

impl OrderService {
    fn new() -> Self {
        Self {
            processor: PayPalPayment,
        }
    }

    fn process_order(&self, amount: f64) {
        println!("Processing the order...");
        if self.processor.process_payment(amount) {
            println!("Order paid successfully!");
        }
    }
}

fn main() {
    // Usage: The high-level service owns a concrete low-level detail.
    println!("=== DIP Violation: Hard-Wired Gateway ===\n");

    let service = OrderService::new();
    service.process_order(100.0);

    println!("\n=== Key Points ===");
    println!("- OrderService names PayPalPayment in its own constructor");
    println!("- Switching gateways or mocking one requires editing the service");
    println!("- See p1_payment_usage for the injected version");
}
