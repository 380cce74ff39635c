//! Pattern 1: Printers
//! Example: Violation - a fat device trait full of unsupported methods
//!
//! Run with: cargo run --example p1_printer_violation

use thiserror::Error;

#[derive(Error, Debug)]
#[error("this device cannot {0}")]
struct Unsupported(&'static str);

// Every device must promise all four capabilities, supported or not.
trait AllInOnePrinter {
    fn print(&self, document: &str);
    fn scan(&self, document: &str) -> Result<String, Unsupported>;
    fn fax(&self, document: &str, number: &str) -> Result<(), Unsupported>;
    fn photocopy(&self, document: &str) -> Result<String, Unsupported>;
}

struct SimplePrinter;

impl AllInOnePrinter for SimplePrinter {
    fn print(&self, document: &str) {
        println!("Printing: {document}");
    }

    // Three quarters of the contract is stubbed with errors.
    fn scan(&self, _document: &str) -> Result<String, Unsupported> {
        Err(Unsupported("scan"))
    }

    fn fax(&self, _document: &str, _number: &str) -> Result<(), Unsupported> {
        Err(Unsupported("fax"))
    }

    fn photocopy(&self, _document: &str) -> Result<String, Unsupported> {
        Err(Unsupported("photocopy"))
    }
}

fn main() {
    // Usage: Callers see a scanner-shaped API on a device with no scanner.
    println!("=== ISP Violation: All-In-One Trait ===\n");

    let printer = SimplePrinter;
    printer.print("Important document");

    match printer.scan("Important document") {
        Ok(data) => println!("Scanned: {data}"),
        Err(e) => println!("Error: {e}"),
    }

    if let Err(e) = printer.fax("Contract", "+380501234567") {
        println!("Error: {e}");
    }

    println!("\n=== Key Points ===");
    println!("- The trait advertises capabilities the device lacks");
    println!("- Every unsupported method is a runtime error waiting to happen");
    println!("- See p1_printer_usage for the segregated version");
}
