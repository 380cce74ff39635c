//! Pattern 2: Order
//! Example: Violation - items, pricing, email and logging in one struct
//!
//! Run with: cargo run --example p2_order_violation

use chrono::Utc;

struct Item {
    name: String,
    price: f64,
    quantity: u32,
}

// Too many reasons to change: the tax rule, the email template,
// the log format and the item storage all live here.
struct Order {
    customer_email: String,
    items: Vec<Item>,
}

impl Order {
    fn new(customer_email: &str) -> Self {
        Self {
            customer_email: customer_email.to_string(),
            items: Vec::new(),
        }
    }

    fn add_item(&mut self, name: &str, price: f64, quantity: u32) {
        self.items.push(Item {
            name: name.to_string(),
            price,
            quantity,
        });
    }

    fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    fn tax(&self) -> f64 {
        self.total() * 0.20
    }

    fn total_with_tax(&self) -> f64 {
        self.total() + self.tax()
    }

    fn send_confirmation_email(&self) {
        let body = format!(
            "Thank you for your order!\nItems: {}\nTotal: {:.2} UAH",
            self.items.len(),
            self.total_with_tax()
        );
        self.send_email(&self.customer_email, "Order confirmation", &body);
    }

    fn send_email(&self, to: &str, subject: &str, body: &str) {
        println!("Sending email to {to}");
        println!("Subject: {subject}");
        println!("Body: {body}");
    }

    fn log_order(&self) {
        let entry = format!(
            "[{}] Order created for {}, Total: {:.2} UAH",
            Utc::now().to_rfc3339(),
            self.customer_email,
            self.total_with_tax()
        );
        self.write_to_log_file(&entry);
    }

    fn write_to_log_file(&self, entry: &str) {
        println!("Writing to log: {entry}");
    }
}

fn main() {
    // Usage: One object handles the whole order lifecycle by itself.
    println!("=== SRP Violation: God-Object Order ===\n");

    let mut order = Order::new("customer@example.com");
    order.add_item("Laptop", 25_000.0, 1);
    order.add_item("Mouse", 500.0, 2);

    for item in &order.items {
        println!("{} x{} at {:.2} UAH", item.name, item.quantity, item.price);
    }
    println!();

    order.send_confirmation_email();
    order.log_order();

    println!("\n=== Key Points ===");
    println!("- A new notification channel or tax rule means editing Order");
    println!("- Pricing cannot be tested without constructing the mailer code");
    println!("- See p2_order_usage for the refactored version");
}
