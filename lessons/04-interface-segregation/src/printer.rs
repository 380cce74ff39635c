//! One trait per device capability.

pub trait Print {
    fn print(&self, document: &str);
}

pub trait Scan {
    fn scan(&self, document: &str) -> String;
}

pub trait Fax {
    fn fax(&self, document: &str, number: &str);
}

pub trait Photocopy {
    fn photocopy(&self, document: &str) -> String;
}

/// Prints. That is all it claims and all it does.
pub struct SimplePrinter;

impl Print for SimplePrinter {
    fn print(&self, document: &str) {
        println!("Printing: {document}");
    }
}

/// Prints, scans and faxes; deliberately no photocopy unit.
pub struct MultiFunctionPrinter;

impl Print for MultiFunctionPrinter {
    fn print(&self, document: &str) {
        println!("Printing: {document}");
    }
}

impl Scan for MultiFunctionPrinter {
    fn scan(&self, document: &str) -> String {
        println!("Scanning: {document}");
        format!("Scanned data from {document}")
    }
}

impl Fax for MultiFunctionPrinter {
    fn fax(&self, document: &str, number: &str) {
        println!("Faxing {document} to {number}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_returns_scanned_data() {
        let printer = MultiFunctionPrinter;
        assert_eq!(printer.scan("Contract"), "Scanned data from Contract");
    }

    #[test]
    fn test_print_capability_is_shared() {
        // Both devices substitute for the Print trait alone.
        let printers: Vec<Box<dyn Print>> = vec![Box::new(SimplePrinter), Box::new(MultiFunctionPrinter)];
        for printer in &printers {
            printer.print("Report");
        }
    }
}
