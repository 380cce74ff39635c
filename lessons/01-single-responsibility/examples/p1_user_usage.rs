//! Pattern 1: User
//! Example: Refactored - each collaborator has one responsibility
//!
//! Run with: cargo run --example p1_user_usage

use single_responsibility::user::{User, UserFormatter, UserRepository, UserValidator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Usage: Storage, validation, persistence and formatting are separate
    // types that can be used (and changed) independently.
    println!("=== SRP Refactored: Focused Collaborators ===\n");

    let user = User::new("Oleksandr", "alex@example.com", 25);

    println!("Validation: {:?}", UserValidator::validate(&user));

    let repository = UserRepository;
    repository.save(&user)?;

    println!("{}", UserFormatter::display_string(&user));
    println!("{}", UserFormatter::to_json(&user)?);

    println!("\n=== Typed Validation Errors ===");
    let broken = User::new("Oleksandr", "not-an-email", 25);
    if let Err(e) = repository.save(&broken) {
        println!("Rejected: {e}");
    }

    Ok(())
}
