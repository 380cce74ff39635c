//! Pattern 1: User
//! Example: Violation - one struct with four responsibilities
//!
//! Run with: cargo run --example p1_user_violation

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

#[derive(Error, Debug)]
#[error("invalid user data")]
struct InvalidUserData;

// One struct that stores data, validates it, saves it and formats it.
// Four reasons to change - any of them forces edits to this one type.
struct User {
    name: String,
    email: String,
    age: u8,
}

impl User {
    fn new(name: &str, email: &str, age: u8) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    // Responsibility 2: validation
    fn validate_email(&self) -> bool {
        EMAIL_RE.is_match(&self.email)
    }

    fn validate_age(&self) -> bool {
        self.age <= 120
    }

    fn validate_name(&self) -> bool {
        (2..=50).contains(&self.name.chars().count())
    }

    // Responsibility 3: persistence
    fn save_to_database(&self) -> Result<(), InvalidUserData> {
        if self.validate_email() && self.validate_age() && self.validate_name() {
            println!("Saving user {} to database...", self.name);
            self.execute_query(&format!(
                "INSERT INTO users (name, email, age) VALUES ('{}', '{}', {})",
                self.name, self.email, self.age
            ));
            Ok(())
        } else {
            Err(InvalidUserData)
        }
    }

    fn execute_query(&self, query: &str) {
        println!("Executing: {query}");
    }

    // Responsibility 4: formatting
    fn display_string(&self) -> String {
        format!("User: {} ({}), Age: {}", self.name, self.email, self.age)
    }
}

fn main() {
    // Usage: The same struct is asked to validate, persist and format.
    println!("=== SRP Violation: God-Object User ===\n");

    let user = User::new("Oleksandr", "alex@example.com", 25);
    println!("{}", user.display_string());

    match user.save_to_database() {
        Ok(()) => println!("Saved."),
        Err(e) => println!("Error: {e}"),
    }

    println!("\n=== Invalid Data Path ===");
    let broken = User::new("A", "not-an-email", 25);
    match broken.save_to_database() {
        Ok(()) => println!("Saved."),
        Err(e) => println!("Error: {e}"),
    }

    println!("\n=== Key Points ===");
    println!("- Changing the email rule, the SQL schema or the display format");
    println!("  all force edits to the same struct");
    println!("- Validation cannot be reused without dragging persistence along");
    println!("- See p1_user_usage for the refactored version");
}
