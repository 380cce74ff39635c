//! Pattern 2: Discount
//! Example: Violation - a customer-type switch in every method
//!
//! Run with: cargo run --example p2_discount_violation

use chrono::{Datelike, NaiveDate, Utc};

#[derive(Clone, Copy)]
enum CustomerType {
    Regular,
    Premium,
    Vip,
    Student,
}

struct Customer {
    name: String,
    customer_type: CustomerType,
    member_since: NaiveDate,
}

struct DiscountCalculator;

impl DiscountCalculator {
    // The same type switch appears here...
    fn discount(customer: &Customer, order_amount: f64) -> f64 {
        match customer.customer_type {
            CustomerType::Regular => 0.0,
            CustomerType::Premium => order_amount * 0.10,
            CustomerType::Vip => {
                if Self::years_of_membership(customer.member_since) >= 2 {
                    order_amount * 0.20
                } else {
                    order_amount * 0.15
                }
            }
            CustomerType::Student => (order_amount * 0.15).min(500.0),
        }
    }

    // ...and here, duplicating the VIP tenure rule.
    fn description(customer: &Customer) -> String {
        match customer.customer_type {
            CustomerType::Regular => "No discount".to_string(),
            CustomerType::Premium => "10% off all items".to_string(),
            CustomerType::Vip => {
                if Self::years_of_membership(customer.member_since) >= 2 {
                    "VIP discount 20% off all items".to_string()
                } else {
                    "VIP discount 15% off all items".to_string()
                }
            }
            CustomerType::Student => "Student discount 15% (500 UAH max)".to_string(),
        }
    }

    fn years_of_membership(member_since: NaiveDate) -> i32 {
        Utc::now().year() - member_since.year()
    }
}

fn main() {
    // Usage: Every customer category funnels through the same switches.
    println!("=== OCP Violation: Customer-Type Switches ===\n");

    let customers = [
        Customer {
            name: "Ivan".to_string(),
            customer_type: CustomerType::Regular,
            member_since: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"),
        },
        Customer {
            name: "Maria".to_string(),
            customer_type: CustomerType::Premium,
            member_since: NaiveDate::from_ymd_opt(2022, 6, 15).expect("valid date"),
        },
        Customer {
            name: "Oleksandr".to_string(),
            customer_type: CustomerType::Vip,
            member_since: NaiveDate::from_ymd_opt(2020, 3, 20).expect("valid date"),
        },
        Customer {
            name: "Anna".to_string(),
            customer_type: CustomerType::Student,
            member_since: NaiveDate::from_ymd_opt(2023, 9, 1).expect("valid date"),
        },
    ];

    for customer in &customers {
        println!(
            "{}: {} -> {:.2} UAH off 1000 UAH",
            customer.name,
            DiscountCalculator::description(customer),
            DiscountCalculator::discount(customer, 1000.0)
        );
    }

    println!("\n=== Key Points ===");
    println!("- A senior discount means editing two match blocks in step");
    println!("- The VIP tenure rule is already duplicated between them");
    println!("- See p2_discount_usage for the strategy-based version");
}
