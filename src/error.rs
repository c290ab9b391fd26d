//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every variant of [`AssistantError`] is recoverable: the command loop prints its
//! message and keeps reading.

use crate::domain::ValidationError;
use thiserror::Error;

/// A lookup that required a match found nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No record is filed under the given name
    #[error("Contact not found.")]
    Contact(String),

    /// The record has no phone equal to the one being replaced
    #[error("Old phone number not found.")]
    Phone(String),
}

/// Errors surfaced to the user by the command interpreter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// Malformed phone number or other value object violation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A contact or phone lookup failed where presence was required
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Blank line with no command token
    #[error("Enter the argument for the command.")]
    EmptyInput,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
