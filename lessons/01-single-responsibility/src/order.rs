//! Order handling split into data, pricing, notification and logging.

use chrono::Utc;

pub const TAX_RATE: f64 = 0.20;

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Manages line items and the customer address, nothing else.
#[derive(Debug, Clone)]
pub struct Order {
    customer_email: String,
    items: Vec<LineItem>,
}

impl Order {
    pub fn new(customer_email: impl Into<String>) -> Self {
        Self {
            customer_email: customer_email.into(),
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, name: impl Into<String>, price: f64, quantity: u32) {
        self.items.push(LineItem {
            name: name.into(),
            price,
            quantity,
        });
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }
}

/// Computes totals and tax. Stateless.
pub struct OrderCalculator;

impl OrderCalculator {
    pub fn total(order: &Order) -> f64 {
        order
            .items()
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    pub fn tax(order: &Order) -> f64 {
        Self::total(order) * TAX_RATE
    }

    pub fn total_with_tax(order: &Order) -> f64 {
        Self::total(order) + Self::tax(order)
    }
}

/// Sends the confirmation message. The mail gateway is simulated.
pub struct OrderEmailService;

impl OrderEmailService {
    pub fn send_confirmation(order: &Order) {
        let total = OrderCalculator::total_with_tax(order);
        let body = format!(
            "Thank you for your order!\nItems: {}\nTotal: {:.2} UAH",
            order.items().len(),
            total
        );
        Self::send_email(order.customer_email(), "Order confirmation", &body);
    }

    fn send_email(to: &str, subject: &str, body: &str) {
        println!("Sending email to {to}");
        println!("Subject: {subject}");
        println!("Body: {body}");
    }
}

/// Writes the audit line. The log file is simulated.
pub struct OrderLogger;

impl OrderLogger {
    pub fn log_order(order: &Order) {
        let entry = format!(
            "[{}] Order created for {}, Total: {:.2} UAH",
            Utc::now().to_rfc3339(),
            order.customer_email(),
            OrderCalculator::total_with_tax(order)
        );
        Self::write_to_log_file(&entry);
    }

    fn write_to_log_file(entry: &str) {
        println!("Writing to log: {entry}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        let mut order = Order::new("customer@example.com");
        order.add_item("Laptop", 25_000.0, 1);
        order.add_item("Mouse", 500.0, 2);
        order
    }

    #[test]
    fn test_total_sums_price_times_quantity() {
        assert_eq!(OrderCalculator::total(&sample_order()), 26_000.0);
    }

    #[test]
    fn test_tax_is_twenty_percent() {
        assert_eq!(OrderCalculator::tax(&sample_order()), 5_200.0);
    }

    #[test]
    fn test_total_with_tax() {
        assert_eq!(OrderCalculator::total_with_tax(&sample_order()), 31_200.0);
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let order = Order::new("customer@example.com");
        assert_eq!(OrderCalculator::total(&order), 0.0);
        assert_eq!(OrderCalculator::total_with_tax(&order), 0.0);
    }

    #[test]
    fn test_items_are_preserved_in_order() {
        let order = sample_order();
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.items()[0].name, "Laptop");
        assert_eq!(order.items()[1].quantity, 2);
    }
}
