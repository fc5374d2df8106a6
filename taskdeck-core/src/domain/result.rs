//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0} is only available with a working data directory")]
    UnavailableContext(&'static str),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Task feed error: {0}")]
    Feed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a task feed error
    pub fn feed(msg: impl Into<String>) -> Self {
        Self::Feed(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_email_message_names_the_email() {
        let err = Error::DuplicateEmail {
            email: "ana@example.com".to_string(),
        };
        assert!(err.to_string().contains("ana@example.com"));
    }

    #[test]
    fn test_unavailable_context_names_the_operation() {
        let err = Error::UnavailableContext("register");
        assert!(err.to_string().starts_with("register"));
    }
}
