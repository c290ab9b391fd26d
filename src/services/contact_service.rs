//! Contact service layer.
//!
//! Business logic for adding, changing, listing and deleting contacts.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{AssistantResult, NotFoundError};
use crate::models::Record;
use crate::repositories::{AddressBook, ContactRepository};

/// Contact operations over a [`ContactRepository`].
#[derive(Debug, Default)]
pub struct ContactService<R = AddressBook> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Create a new contact service.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrow the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Add `phone` to the contact filed under `name`, creating the contact
    /// if it does not exist yet.
    ///
    /// An invalid phone number is rejected before anything is stored, so a
    /// failed add never leaves an empty contact behind.
    pub fn add_phone(&mut self, name: &str, phone: &str) -> AssistantResult<()> {
        if let Some(record) = self.repo.find_mut(name) {
            record.add_phone(phone)?;
            tracing::debug!(name, phone, "Added phone to existing contact");
            return Ok(());
        }

        let mut record = Record::new(ContactName::new(name)?);
        record.add_phone(phone)?;
        self.repo.add_record(record);
        tracing::info!(name, "Created contact");
        Ok(())
    }

    /// Replace `old` with `new` on an existing contact.
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> AssistantResult<()> {
        let record = self.find_mut(name)?;
        record.edit_phone(old, new)?;
        tracing::debug!(name, old, new, "Changed phone");
        Ok(())
    }

    /// Remove every occurrence of `phone` from an existing contact.
    /// Returns how many were removed.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> AssistantResult<usize> {
        let removed = self.find_mut(name)?.remove_phone(phone);
        tracing::debug!(name, phone, removed, "Removed phone");
        Ok(removed)
    }

    /// Look up `phone` on an existing contact.
    pub fn find_phone(&self, name: &str, phone: &str) -> AssistantResult<Option<&PhoneNumber>> {
        Ok(self.find(name)?.find_phone(phone))
    }

    /// Phone numbers of an existing contact, in insertion order.
    pub fn phones(&self, name: &str) -> AssistantResult<&[PhoneNumber]> {
        Ok(self.find(name)?.phones())
    }

    /// Look up a contact by exact name.
    pub fn find(&self, name: &str) -> AssistantResult<&Record> {
        self.repo
            .find(name)
            .ok_or_else(|| NotFoundError::Contact(name.to_string()).into())
    }

    /// Every contact in insertion order.
    pub fn all(&self) -> Vec<&Record> {
        self.repo.all()
    }

    /// Delete a contact. Deleting a name that isn't there is a no-op;
    /// the return value says whether anything was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        let removed = self.repo.delete(name).is_some();
        tracing::debug!(name, removed, "Delete contact");
        removed
    }

    fn find_mut(&mut self, name: &str) -> AssistantResult<&mut Record> {
        self.repo
            .find_mut(name)
            .ok_or_else(|| NotFoundError::Contact(name.to_string()).into())
    }
}
