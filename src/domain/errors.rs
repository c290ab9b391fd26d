//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty."),
            Self::InvalidPhone(_) => write!(f, "Phone number must be 10 digits."),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_phone_message_hides_input() {
        let err = ValidationError::InvalidPhone("12ab".to_string());
        assert_eq!(err.to_string(), "Phone number must be 10 digits.");
    }

    #[test]
    fn test_empty_name_message() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Contact name cannot be empty."
        );
    }
}
