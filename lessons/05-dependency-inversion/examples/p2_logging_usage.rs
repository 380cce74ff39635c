//! Pattern 2: Logging
//! Example: Refactored - the sink is injected through a trait
//!
//! Run with: cargo run --example p2_logging_usage

use dependency_inversion::logging::{
    ConsoleLogger, FileLogger, MemoryLogger, RemoteLogger, UserService,
};

fn main() {
    // Usage: The same service logs to whichever sink it was built with.
    println!("=== Trying different log sinks ===");

    println!("\n1. Development (console logger):");
    let dev_service = UserService::new(Box::new(ConsoleLogger));
    dev_service.create_user("Ivan", "ivan@example.com");
    dev_service.delete_user("user123");

    println!("\n2. Production (remote logger):");
    let prod_service = UserService::new(Box::new(RemoteLogger));
    prod_service.create_user("Maria", "maria@example.com");
    prod_service.delete_user("user456");

    println!("\n3. Staging (file logger):");
    let staging_service = UserService::new(Box::new(FileLogger));
    staging_service.create_user("Petro", "petro@example.com");
    staging_service.delete_user("user789");

    println!("\n4. Tests (capturing logger):");
    let memory = MemoryLogger::new();
    let test_service = UserService::new(Box::new(memory.clone()));
    test_service.create_user("Test User", "test@example.com");
    println!("Captured entries: {:?}", memory.entries());
}
