//! Pattern 2: Discount
//! Example: Refactored - customers hold swappable strategies
//!
//! Run with: cargo run --example p2_discount_usage

use chrono::NaiveDate;
use open_closed::discount::{
    Customer, DiscountCalculator, NoDiscount, PremiumDiscount, StudentDiscount, VipDiscount,
};

fn member_since(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn main() {
    // Usage: One strategy per customer, priced through the trait.
    println!("=== OCP Refactored: Discount Strategies ===\n");

    let mut customers = vec![
        Customer::new("1", "Ivan", Box::new(NoDiscount), member_since(2023, 1, 1)),
        Customer::new(
            "2",
            "Maria",
            Box::new(PremiumDiscount),
            member_since(2022, 6, 15),
        ),
        Customer::new(
            "3",
            "Oleksandr",
            Box::new(VipDiscount),
            member_since(2020, 3, 20),
        ),
        Customer::new(
            "4",
            "Anna",
            Box::new(StudentDiscount),
            member_since(2023, 9, 1),
        ),
    ];

    let order_amount = 1000.0;
    for customer in &customers {
        println!("{}", DiscountCalculator::report(customer, order_amount));
        println!("---");
    }

    // Strategies can change at runtime, per customer.
    println!("\n=== Runtime Strategy Swap ===");
    let ivan = &mut customers[0];
    println!("Before upgrade: {}", DiscountCalculator::description(ivan));

    ivan.set_strategy(Box::new(VipDiscount));
    println!("After upgrade:  {}", DiscountCalculator::description(ivan));
    println!(
        "Ivan's discount on {order_amount:.2} UAH is now {:.2} UAH",
        DiscountCalculator::discount(ivan, order_amount)
    );
}
