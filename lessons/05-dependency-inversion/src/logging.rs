//! Log sinks behind a trait, injected into the user service.

use std::cell::RefCell;
use std::rc::Rc;

pub trait Logger {
    fn log(&self, message: &str);
}

pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("[CONSOLE]: {message}");
    }
}

/// File sink stub; a real one would append to disk.
pub struct FileLogger;

impl Logger for FileLogger {
    fn log(&self, message: &str) {
        println!("[FILE]: writing to file - {message}");
    }
}

/// Remote sink stub; a real one would ship entries to a server.
pub struct RemoteLogger;

impl Logger for RemoteLogger {
    fn log(&self, message: &str) {
        println!("[REMOTE]: sending to server - {message}");
    }
}

/// Captures entries so tests can assert on what was logged. The handle is
/// shared, so the caller keeps access after handing the logger away.
#[derive(Clone, Default)]
pub struct MemoryLogger {
    entries: Rc<RefCell<Vec<String>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.entries.borrow_mut().push(message.to_string());
    }
}

/// Business logic that logs through whatever sink it was given.
pub struct UserService {
    logger: Box<dyn Logger>,
}

impl UserService {
    pub fn new(logger: Box<dyn Logger>) -> Self {
        Self { logger }
    }

    pub fn create_user(&self, name: &str, email: &str) {
        self.logger.log(&format!("Creating user {name} <{email}>"));
        self.logger.log(&format!("User {name} created successfully"));
    }

    pub fn delete_user(&self, id: &str) {
        self.logger.log(&format!("Deleting user with id {id}"));
        self.logger.log(&format!("User {id} deleted"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_captures_entries() {
        let logger = MemoryLogger::new();
        let service = UserService::new(Box::new(logger.clone()));

        service.create_user("Ivan", "ivan@example.com");
        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], "Creating user Ivan <ivan@example.com>");
        assert_eq!(entries[1], "User Ivan created successfully");
    }

    #[test]
    fn test_memory_logger_clear() {
        let logger = MemoryLogger::new();
        let service = UserService::new(Box::new(logger.clone()));

        service.delete_user("user123");
        assert!(!logger.entries().is_empty());

        logger.clear();
        assert!(logger.entries().is_empty());
    }
}
