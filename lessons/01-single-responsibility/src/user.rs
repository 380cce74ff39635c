//! User profile split into storage, validation, persistence and formatting.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

/// Holds profile data and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    name: String,
    email: String,
    age: u8,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u8) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}

/// The first rule a user record breaks.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("email address '{0}' is not valid")]
    InvalidEmail(String),
    #[error("age {0} is outside the allowed range 0..=120")]
    InvalidAge(u8),
    #[error("name must be 2 to 50 characters, got {0}")]
    InvalidName(usize),
}

/// Checks user data. Knows nothing about storage or display.
pub struct UserValidator;

impl UserValidator {
    pub fn email_is_valid(email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }

    pub fn age_is_valid(age: u8) -> bool {
        age <= 120
    }

    pub fn name_is_valid(name: &str) -> bool {
        (2..=50).contains(&name.chars().count())
    }

    /// Reports the first failing rule.
    pub fn validate(user: &User) -> Result<(), ValidationError> {
        if !Self::email_is_valid(user.email()) {
            return Err(ValidationError::InvalidEmail(user.email().to_string()));
        }
        if !Self::age_is_valid(user.age()) {
            return Err(ValidationError::InvalidAge(user.age()));
        }
        if !Self::name_is_valid(user.name()) {
            return Err(ValidationError::InvalidName(user.name().chars().count()));
        }
        Ok(())
    }
}

/// Persists users. The database is simulated with console output.
pub struct UserRepository;

impl UserRepository {
    pub fn save(&self, user: &User) -> Result<(), ValidationError> {
        UserValidator::validate(user)?;

        println!("Saving user {} to database...", user.name());
        let query = format!(
            "INSERT INTO users (name, email, age) VALUES ('{}', '{}', {})",
            user.name(),
            user.email(),
            user.age()
        );
        self.execute_query(&query);
        Ok(())
    }

    fn execute_query(&self, query: &str) {
        println!("Executing: {query}");
    }
}

/// Renders users for display. No validation, no persistence.
pub struct UserFormatter;

impl UserFormatter {
    pub fn display_string(user: &User) -> String {
        format!(
            "User: {} ({}), Age: {}",
            user.name(),
            user.email(),
            user.age()
        )
    }

    pub fn to_json(user: &User) -> serde_json::Result<String> {
        serde_json::to_string(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> User {
        User::new("Oleksandr", "alex@example.com", 25)
    }

    #[test]
    fn test_email_validation() {
        assert!(UserValidator::email_is_valid("alex@example.com"));
        assert!(!UserValidator::email_is_valid("not-an-email"));
        assert!(!UserValidator::email_is_valid("two words@example.com"));
        assert!(!UserValidator::email_is_valid("alex@nodot"));
    }

    #[test]
    fn test_age_boundaries() {
        assert!(UserValidator::age_is_valid(0));
        assert!(UserValidator::age_is_valid(120));
        assert!(!UserValidator::age_is_valid(121));
    }

    #[test]
    fn test_name_length_boundaries() {
        assert!(!UserValidator::name_is_valid("A"));
        assert!(UserValidator::name_is_valid("Al"));
        assert!(UserValidator::name_is_valid(&"x".repeat(50)));
        assert!(!UserValidator::name_is_valid(&"x".repeat(51)));
    }

    #[test]
    fn test_validate_reports_first_failure() {
        let user = User::new("A", "broken", 200);
        assert_eq!(
            UserValidator::validate(&user),
            Err(ValidationError::InvalidEmail("broken".to_string()))
        );

        let user = User::new("A", "ok@example.com", 200);
        assert_eq!(
            UserValidator::validate(&user),
            Err(ValidationError::InvalidAge(200))
        );

        let user = User::new("A", "ok@example.com", 30);
        assert_eq!(
            UserValidator::validate(&user),
            Err(ValidationError::InvalidName(1))
        );
    }

    #[test]
    fn test_repository_rejects_invalid_user() {
        let repo = UserRepository;
        let user = User::new("A", "broken", 25);
        assert!(repo.save(&user).is_err());
        assert!(repo.save(&valid_user()).is_ok());
    }

    #[test]
    fn test_display_string() {
        assert_eq!(
            UserFormatter::display_string(&valid_user()),
            "User: Oleksandr (alex@example.com), Age: 25"
        );
    }

    #[test]
    fn test_json_contains_all_fields() {
        let json = UserFormatter::to_json(&valid_user()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Oleksandr","email":"alex@example.com","age":25}"#
        );
    }
}
