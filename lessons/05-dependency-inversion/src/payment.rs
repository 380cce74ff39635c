//! Payment gateways behind a trait, injected into the order service.

#[cfg(test)]
use mockall::automock;

/// One capability: charge an amount. Returns whether the charge went through.
#[cfg_attr(test, automock)]
pub trait PaymentProcessor {
    fn process(&self, amount: f64) -> bool;
}

pub struct PayPalPayment;

impl PaymentProcessor for PayPalPayment {
    fn process(&self, amount: f64) -> bool {
        println!("Processing {amount:.2} UAH through PayPal");
        true
    }
}

pub struct StripePayment;

impl PaymentProcessor for StripePayment {
    fn process(&self, amount: f64) -> bool {
        println!("Processing {amount:.2} UAH through Stripe");
        true
    }
}

pub struct BankCardPayment;

impl PaymentProcessor for BankCardPayment {
    fn process(&self, amount: f64) -> bool {
        println!("Processing {amount:.2} UAH through a bank card");
        true
    }
}

/// Depends on the abstraction only; the processor arrives from outside.
pub struct OrderService<P: PaymentProcessor> {
    processor: P,
}

impl<P: PaymentProcessor> OrderService<P> {
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    pub fn process_order(&self, amount: f64) -> bool {
        println!("Processing the order...");
        let success = self.processor.process(amount);
        if success {
            println!("Order paid successfully!");
        }
        success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_reports_processor_outcome() {
        let mut accepting = MockPaymentProcessor::new();
        accepting.expect_process().return_const(true);
        assert!(OrderService::new(accepting).process_order(100.0));

        let mut declining = MockPaymentProcessor::new();
        declining.expect_process().return_const(false);
        assert!(!OrderService::new(declining).process_order(100.0));
    }

    #[test]
    fn test_service_passes_amount_through() {
        let mut processor = MockPaymentProcessor::new();
        processor
            .expect_process()
            .withf(|amount| (amount - 250.0).abs() < f64::EPSILON)
            .times(1)
            .return_const(true);
        OrderService::new(processor).process_order(250.0);
    }

    #[test]
    fn test_concrete_processors_accept_charges() {
        assert!(PayPalPayment.process(100.0));
        assert!(StripePayment.process(200.0));
        assert!(BankCardPayment.process(150.0));
    }
}
