//! Discount strategies a customer can hold and swap at runtime.

use chrono::{Datelike, NaiveDate, Utc};

/// Calendar-year tenure, matching how membership cards usually work:
/// joining in December still counts as a full year the following January.
pub fn years_of_membership(member_since: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - member_since.year()
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub trait DiscountStrategy {
    fn discount(&self, order_amount: f64, member_since: NaiveDate) -> f64;
    fn description(&self) -> String;
}

pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn discount(&self, _order_amount: f64, _member_since: NaiveDate) -> f64 {
        0.0
    }

    fn description(&self) -> String {
        "No discount".to_string()
    }
}

pub struct PremiumDiscount;

impl DiscountStrategy for PremiumDiscount {
    fn discount(&self, order_amount: f64, _member_since: NaiveDate) -> f64 {
        order_amount * 0.10
    }

    fn description(&self) -> String {
        "10% off all items".to_string()
    }
}

/// 20% after two full calendar years of membership, 15% before that.
pub struct VipDiscount;

impl VipDiscount {
    fn rate(member_since: NaiveDate) -> f64 {
        if years_of_membership(member_since, today()) >= 2 {
            0.20
        } else {
            0.15
        }
    }
}

impl DiscountStrategy for VipDiscount {
    fn discount(&self, order_amount: f64, member_since: NaiveDate) -> f64 {
        order_amount * Self::rate(member_since)
    }

    fn description(&self) -> String {
        "VIP discount up to 20% off all items".to_string()
    }
}

/// 15%, capped at 500 UAH per order.
pub struct StudentDiscount;

pub const STUDENT_DISCOUNT_CAP: f64 = 500.0;

impl DiscountStrategy for StudentDiscount {
    fn discount(&self, order_amount: f64, _member_since: NaiveDate) -> f64 {
        (order_amount * 0.15).min(STUDENT_DISCOUNT_CAP)
    }

    fn description(&self) -> String {
        "Student discount 15% (500 UAH max)".to_string()
    }
}

/// Holds exactly one active strategy at a time.
pub struct Customer {
    id: String,
    name: String,
    strategy: Box<dyn DiscountStrategy>,
    member_since: NaiveDate,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        strategy: Box<dyn DiscountStrategy>,
        member_since: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            strategy,
            member_since,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member_since(&self) -> NaiveDate {
        self.member_since
    }

    pub fn strategy(&self) -> &dyn DiscountStrategy {
        self.strategy.as_ref()
    }

    /// Swaps the active strategy. Only this customer is affected.
    pub fn set_strategy(&mut self, strategy: Box<dyn DiscountStrategy>) {
        self.strategy = strategy;
    }
}

/// Prices any customer through the strategy trait.
pub struct DiscountCalculator;

impl DiscountCalculator {
    pub fn discount(customer: &Customer, order_amount: f64) -> f64 {
        customer
            .strategy()
            .discount(order_amount, customer.member_since())
    }

    pub fn final_price(customer: &Customer, order_amount: f64) -> f64 {
        order_amount - Self::discount(customer, order_amount)
    }

    pub fn description(customer: &Customer) -> String {
        customer.strategy().description()
    }

    pub fn report(customer: &Customer, order_amount: f64) -> String {
        let discount = Self::discount(customer, order_amount);
        let final_price = Self::final_price(customer, order_amount);
        format!(
            "Customer: {}\nOrder amount: {:.2} UAH\nDiscount type: {}\nDiscount: {:.2} UAH\nAmount due: {:.2} UAH",
            customer.name(),
            order_amount,
            Self::description(customer),
            discount,
            final_price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Dates derived from the current year keep the calendar-year tenure
    // deterministic without pinning the clock.
    fn joined_years_ago(years: i32) -> NaiveDate {
        let year = Utc::now().year() - years;
        NaiveDate::from_ymd_opt(year, 1, 15).unwrap()
    }

    #[test]
    fn test_years_of_membership_is_calendar_based() {
        let joined = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        let today = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        assert_eq!(years_of_membership(joined, today), 2);
    }

    #[test]
    fn test_no_discount_is_zero() {
        assert_eq!(NoDiscount.discount(1000.0, joined_years_ago(5)), 0.0);
    }

    #[test]
    fn test_premium_is_ten_percent() {
        assert_eq!(PremiumDiscount.discount(1000.0, joined_years_ago(0)), 100.0);
    }

    #[test]
    fn test_vip_rates_by_tenure() {
        assert_eq!(VipDiscount.discount(1000.0, joined_years_ago(3)), 200.0);
        assert_eq!(VipDiscount.discount(1000.0, joined_years_ago(0)), 150.0);
    }

    #[test]
    fn test_student_cap_binds_only_on_large_orders() {
        // 15% of 1000 is 150, far below the cap
        assert_eq!(StudentDiscount.discount(1000.0, joined_years_ago(1)), 150.0);
        // cap starts binding above 500 / 0.15 = 3333.33
        let just_below_cap = StudentDiscount.discount(3333.0, joined_years_ago(1));
        assert!((just_below_cap - 499.95).abs() < 1e-9);
        assert_eq!(StudentDiscount.discount(10_000.0, joined_years_ago(1)), 500.0);
    }

    #[test]
    fn test_swapping_strategy_changes_later_prices_only() {
        let mut ivan = Customer::new("1", "Ivan", Box::new(NoDiscount), joined_years_ago(3));
        let maria = Customer::new("2", "Maria", Box::new(PremiumDiscount), joined_years_ago(1));

        let before = DiscountCalculator::discount(&ivan, 1000.0);
        assert_eq!(before, 0.0);

        ivan.set_strategy(Box::new(VipDiscount));
        assert_eq!(DiscountCalculator::discount(&ivan, 1000.0), 200.0);

        // the earlier result and the other customer are untouched
        assert_eq!(before, 0.0);
        assert_eq!(DiscountCalculator::discount(&maria, 1000.0), 100.0);
    }

    #[test]
    fn test_final_price_subtracts_discount() {
        let anna = Customer::new("4", "Anna", Box::new(StudentDiscount), joined_years_ago(1));
        assert_eq!(DiscountCalculator::final_price(&anna, 1000.0), 850.0);
    }

    #[test]
    fn test_report_contains_money_with_two_decimals() {
        let anna = Customer::new("4", "Anna", Box::new(StudentDiscount), joined_years_ago(1));
        let report = DiscountCalculator::report(&anna, 1000.0);
        assert!(report.contains("Customer: Anna"));
        assert!(report.contains("Discount: 150.00 UAH"));
        assert!(report.contains("Amount due: 850.00 UAH"));
    }
}
