//! Pattern 2: Logging
//! Example: Violation - business logic writes straight to the console
//!
//! Run with: cargo run --example p2_logging_violation

// Every log line hard-codes both the destination and the format. Moving to
// a file or a log server means editing every method of the service.
struct UserService;

impl UserService {
    fn create_user(&self, name: &str, email: &str) {
        println!("[LOG] Creating user {name} <{email}>");
        println!("[LOG] User {name} created successfully");
    }

    fn delete_user(&self, id: &str) {
        println!("[LOG] Deleting user with id {id}");
        println!("[LOG] User {id} deleted");
    }
}

fn main() {
    // Usage: Works, until the day the logs must go anywhere else.
    println!("=== DIP Violation: Hard-Wired Logging ===\n");

    let service = UserService;
    service.create_user("Ivan", "ivan@example.com");
    service.delete_user("user123");

    println!("\n=== Key Points ===");
    println!("- The service owns the log destination and the format");
    println!("- Tests cannot observe what was logged without capturing stdout");
    println!("- See p2_logging_usage for the injected version");
}
