//! Pattern 2: Employees
//! Example: Violation - every worker is forced to carry management powers
//!
//! Run with: cargo run --example p2_employee_violation

use thiserror::Error;

#[derive(Error, Debug)]
#[error("not allowed: {0}")]
struct NotAllowed(&'static str);

// Mixes the individual-contributor role with the management role.
trait Worker {
    fn work(&self);
    fn eat(&self);
    fn manage_team(&self) -> Result<(), NotAllowed>;
    fn fire_employee(&self, id: &str) -> Result<(), NotAllowed>;
    fn approve_vacation(&self, id: &str) -> Result<(), NotAllowed>;
}

struct RegularEmployee;

impl Worker for RegularEmployee {
    fn work(&self) {
        println!("Doing my job");
    }

    fn eat(&self) {
        println!("Going to lunch");
    }

    fn manage_team(&self) -> Result<(), NotAllowed> {
        Err(NotAllowed("I cannot manage the team"))
    }

    fn fire_employee(&self, _id: &str) -> Result<(), NotAllowed> {
        Err(NotAllowed("I cannot fire anyone"))
    }

    fn approve_vacation(&self, _id: &str) -> Result<(), NotAllowed> {
        Err(NotAllowed("I cannot approve vacations"))
    }
}

fn main() {
    // Usage: The type system says "manager", the runtime says no.
    println!("=== ISP Violation: Fat Worker Trait ===\n");

    let employee = RegularEmployee;
    employee.work();
    employee.eat();

    if let Err(e) = employee.manage_team() {
        println!("Error: {e}");
    }
    if let Err(e) = employee.fire_employee("123") {
        println!("Error: {e}");
    }

    println!("\n=== Key Points ===");
    println!("- Giving a cashier the keys to the company accounts and then");
    println!("  relying on them to refuse is not a design");
    println!("- See p2_employee_usage for the role-trait version");
}
