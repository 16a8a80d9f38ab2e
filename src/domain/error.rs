//! Errors raised by the contact model
//!
//! Every variant maps onto one of two kinds: malformed input or a missing
//! target. Turning these into user-facing text is the CLI's job.

use thiserror::Error;

/// Coarse classification of a [`ContactError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    NotFound,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Contact name must not be empty")]
    EmptyName,

    #[error("Invalid phone '{0}': phone number must contain exactly 10 digits")]
    InvalidPhone(String),

    #[error("Invalid date '{0}': use DD.MM.YYYY")]
    InvalidBirthday(String),

    #[error("Contact {0} not found")]
    ContactNotFound(String),

    #[error("Phone {0} not found")]
    PhoneNotFound(String),

    #[error("Birthday not set for {0}")]
    BirthdayNotSet(String),
}

impl ContactError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContactError::EmptyName
            | ContactError::InvalidPhone(_)
            | ContactError::InvalidBirthday(_) => ErrorKind::InvalidFormat,
            ContactError::ContactNotFound(_)
            | ContactError::PhoneNotFound(_)
            | ContactError::BirthdayNotSet(_) => ErrorKind::NotFound,
        }
    }
}
