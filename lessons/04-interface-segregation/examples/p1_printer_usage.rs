//! Pattern 1: Printers
//! Example: Refactored - devices implement only real capabilities
//!
//! Run with: cargo run --example p1_printer_usage

use interface_segregation::printer::{Fax, MultiFunctionPrinter, Print, Scan, SimplePrinter};

fn main() {
    // Usage: A device's trait list is an honest capability statement.
    let simple = SimplePrinter;
    let multi = MultiFunctionPrinter;

    // The simple printer can only print
    simple.print("Important document");

    // The multifunction printer does everything it implements
    multi.print("Report");
    let scanned = multi.scan("Document");
    println!("Got back: {scanned}");
    multi.fax("Contract", "+380501234567");

    // simple.scan("Document"); // does not compile: SimplePrinter is not Scan
}
