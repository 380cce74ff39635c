//! Pattern 2: Order
//! Example: Refactored - data, pricing, email and logging separated
//!
//! Run with: cargo run --example p2_order_usage

use single_responsibility::order::{Order, OrderCalculator, OrderEmailService, OrderLogger};

fn main() {
    // Usage: Each collaborator can change or be reused on its own.
    println!("=== SRP Refactored: Focused Order Collaborators ===\n");

    let mut order = Order::new("customer@example.com");
    order.add_item("Laptop", 25_000.0, 1);
    order.add_item("Mouse", 500.0, 2);

    println!(
        "Total: {:.2} UAH",
        OrderCalculator::total_with_tax(&order)
    );
    println!();

    OrderEmailService::send_confirmation(&order);
    OrderLogger::log_order(&order);
}
