use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Invalid phone number: {0:?} (expected 10 digits)")]
    InvalidPhone(String),

    #[error("Invalid birthday: {0:?} (expected YYYY-MM-DD)")]
    InvalidBirthday(String),

    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RolodexError {
    /// True for malformed phone numbers and birthdays.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RolodexError::InvalidPhone(_) | RolodexError::InvalidBirthday(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RolodexError::PhoneNotFound(_) | RolodexError::ContactNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RolodexError>;
