//! A checkout service built from two injected abstractions.

use thiserror::Error;

use crate::logging::{ConsoleLogger, FileLogger, Logger};
use crate::payment::{PayPalPayment, PaymentProcessor, StripePayment};

#[derive(Error, Debug, PartialEq)]
pub enum OrderError {
    #[error("order amount must be positive, got {amount}")]
    InvalidAmount { amount: f64 },
    #[error("payment was declined")]
    PaymentDeclined,
}

/// High-level checkout flow. Knows nothing about which gateway charges the
/// card or where the log lines end up.
pub struct CheckoutService<P: PaymentProcessor, L: Logger> {
    processor: P,
    logger: L,
}

impl<P: PaymentProcessor, L: Logger> CheckoutService<P, L> {
    pub fn new(processor: P, logger: L) -> Self {
        Self { processor, logger }
    }

    pub fn process_order(&self, customer: &str, amount: f64) -> Result<(), OrderError> {
        self.logger
            .log(&format!("Starting order for {customer}, amount {amount:.2} UAH"));

        if amount <= 0.0 {
            self.logger
                .log(&format!("Rejected order: invalid amount {amount}"));
            return Err(OrderError::InvalidAmount { amount });
        }

        self.logger.log(&format!("Charging {amount:.2} UAH"));
        if self.processor.process(amount) {
            self.logger.log(&format!("Payment accepted for {customer}"));
            self.logger.log("Order completed");
            Ok(())
        } else {
            self.logger.log(&format!("Payment declined for {customer}"));
            Err(OrderError::PaymentDeclined)
        }
    }

    pub fn refund_order(&self, customer: &str, amount: f64) {
        self.logger
            .log(&format!("Starting refund for {customer}, amount {amount:.2} UAH"));
        self.logger
            .log(&format!("Refunded {amount:.2} UAH to {customer}"));
    }
}

/// Wires the configurations used across environments.
pub struct ServiceFactory;

impl ServiceFactory {
    pub fn development() -> CheckoutService<PayPalPayment, ConsoleLogger> {
        CheckoutService::new(PayPalPayment, ConsoleLogger)
    }

    pub fn production() -> CheckoutService<StripePayment, FileLogger> {
        CheckoutService::new(StripePayment, FileLogger)
    }

    pub fn custom<P: PaymentProcessor, L: Logger>(
        processor: P,
        logger: L,
    ) -> CheckoutService<P, L> {
        CheckoutService::new(processor, logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemoryLogger;

    struct FixedOutcomeProcessor {
        accepts: bool,
    }

    impl PaymentProcessor for FixedOutcomeProcessor {
        fn process(&self, _amount: f64) -> bool {
            self.accepts
        }
    }

    #[test]
    fn test_successful_checkout_logs_the_whole_flow() {
        let logger = MemoryLogger::new();
        let service =
            ServiceFactory::custom(FixedOutcomeProcessor { accepts: true }, logger.clone());

        assert_eq!(service.process_order("Ivan", 1000.0), Ok(()));

        let entries = logger.entries();
        assert_eq!(entries[0], "Starting order for Ivan, amount 1000.00 UAH");
        assert_eq!(entries.last().unwrap(), "Order completed");
    }

    #[test]
    fn test_declined_payment_is_an_error() {
        let logger = MemoryLogger::new();
        let service =
            ServiceFactory::custom(FixedOutcomeProcessor { accepts: false }, logger.clone());

        assert_eq!(
            service.process_order("Ivan", 500.0),
            Err(OrderError::PaymentDeclined)
        );
        assert!(logger
            .entries()
            .iter()
            .any(|entry| entry == "Payment declined for Ivan"));
    }

    #[test]
    fn test_non_positive_amount_never_reaches_the_processor() {
        struct PanickingProcessor;
        impl PaymentProcessor for PanickingProcessor {
            fn process(&self, _amount: f64) -> bool {
                panic!("processor must not be called for invalid amounts");
            }
        }

        let service = ServiceFactory::custom(PanickingProcessor, MemoryLogger::new());
        assert_eq!(
            service.process_order("Ivan", 0.0),
            Err(OrderError::InvalidAmount { amount: 0.0 })
        );
        assert_eq!(
            service.process_order("Ivan", -5.0),
            Err(OrderError::InvalidAmount { amount: -5.0 })
        );
    }

    #[test]
    fn test_refund_logs_two_entries() {
        let logger = MemoryLogger::new();
        let service =
            ServiceFactory::custom(FixedOutcomeProcessor { accepts: true }, logger.clone());

        service.refund_order("Maria", 250.0);
        assert_eq!(
            logger.entries(),
            vec![
                "Starting refund for Maria, amount 250.00 UAH",
                "Refunded 250.00 UAH to Maria",
            ]
        );
    }
}
