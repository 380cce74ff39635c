//! # Interface Segregation Principle
//!
//! No type should be forced to implement methods it cannot support. The fat
//! traits in the `*_violation` examples make simple implementors return
//! "unsupported" errors; the library replaces them with one trait per
//! capability, so a type's trait list states exactly what it can do.
//!
//! ## Pattern 1: Printers
//! - `Print`, `Scan`, `Fax` and `Photocopy` capability traits
//! - `SimplePrinter` implements `Print` only
//! - `MultiFunctionPrinter` implements `Print + Scan + Fax`
//!
//! ## Pattern 2: Employees
//! - `Work`, `Eat` and `Manage` role traits
//! - `RegularEmployee` works and eats
//! - `Manager` additionally manages the team
//!
//! Run any example with:
//! ```bash
//! cargo run --example <example_name>
//! ```

pub mod employee;
pub mod printer;
