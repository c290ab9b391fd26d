//! Contact record: a name and an ordered list of phone numbers.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use crate::error::{AssistantResult, NotFoundError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// Phone numbers keep their insertion order and duplicates are allowed.
/// The name is fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with no phone numbers.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `raw` and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` is not ten digits;
    /// the record is left unchanged.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `raw`. Returns how many were removed.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p != raw);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// The lookup of `old` happens before `new` is validated, so a missing
    /// `old` is reported as not found even when `new` is malformed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AssistantResult<()> {
        let idx = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| NotFoundError::Phone(old.to_string()))?;

        self.phones[idx] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// First phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == raw)
    }

    /// Phones joined with `"; "`, as shown by the `phone` and `all` commands.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// JSON rendering used in diagnostic logs.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )
    }
}
