//! Pattern 2: Discount
//! Example: Extension - new strategies from outside the library
//!
//! Run with: cargo run --example p2_discount_extended

use chrono::NaiveDate;
use open_closed::discount::{Customer, DiscountCalculator, DiscountStrategy, PremiumDiscount};

// Neither strategy exists in the library; the calculator and the customer
// type take them as-is.

struct SeniorDiscount;

impl DiscountStrategy for SeniorDiscount {
    fn discount(&self, order_amount: f64, _member_since: NaiveDate) -> f64 {
        order_amount * 0.12
    }

    fn description(&self) -> String {
        "Senior discount 12%".to_string()
    }
}

struct SeasonalDiscount {
    rate: f64,
    season: String,
}

impl DiscountStrategy for SeasonalDiscount {
    fn discount(&self, order_amount: f64, _member_since: NaiveDate) -> f64 {
        order_amount * self.rate
    }

    fn description(&self) -> String {
        format!("{} discount {}%", self.season, self.rate * 100.0)
    }
}

fn member_since(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn main() {
    // Usage: Extended strategies plug into the unchanged calculator.
    println!("=== OCP Extension: New Strategies, Old Calculator ===\n");

    let customers = vec![
        Customer::new(
            "2",
            "Maria",
            Box::new(PremiumDiscount),
            member_since(2022, 6, 15),
        ),
        Customer::new(
            "5",
            "Petro",
            Box::new(SeniorDiscount),
            member_since(2021, 12, 10),
        ),
        Customer::new(
            "6",
            "Oksana",
            Box::new(SeasonalDiscount {
                rate: 0.25,
                season: "New Year".to_string(),
            }),
            member_since(2023, 1, 15),
        ),
    ];

    for customer in &customers {
        println!("{}", DiscountCalculator::report(customer, 1000.0));
        println!("---");
    }

    println!("\n=== Key Points ===");
    println!("- SeniorDiscount and SeasonalDiscount live in this file only");
    println!("- No library code changed to support them");
}
