//! Pattern 2: Employees
//! Example: Refactored - one trait per role
//!
//! Run with: cargo run --example p2_employee_usage

use interface_segregation::employee::{Eat, Manage, Manager, RegularEmployee, Work};

fn main() {
    // Usage: Everyone gets exactly the capabilities their role needs.
    let employee = RegularEmployee;
    let manager = Manager;

    // A regular employee works and takes lunch
    employee.work();
    employee.eat();

    println!();

    // A manager does the same, plus the management role
    manager.work();
    manager.eat();
    manager.manage_team();
    manager.fire_employee("123");
    manager.approve_vacation("456");

    // employee.manage_team(); // does not compile: RegularEmployee is not Manage
}
