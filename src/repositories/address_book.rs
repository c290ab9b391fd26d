//! In-memory address book.

use super::traits::ContactRepository;
use crate::models::Record;
use tracing::{debug, warn};

/// An insertion-ordered mapping from contact name to [`Record`].
///
/// Records are held in a `Vec` in first-insertion order. Replacing an
/// existing name keeps that name's original position, so `all()` lists
/// contacts in the order they were first added.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl ContactRepository for AddressBook {
    fn add_record(&mut self, record: Record) {
        match record.to_json() {
            Ok(json) => debug!(record = %json, "Storing record"),
            Err(e) => warn!(name = %record.name(), "Failed to serialize record: {}", e),
        }

        match self.position(record.name().as_str()) {
            Some(idx) => {
                debug!(name = %record.name(), "Overwriting existing record");
                self.records[idx] = record;
            }
            None => {
                debug!(name = %record.name(), "Inserting new record");
                self.records.push(record);
            }
        }
    }

    fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    fn delete(&mut self, name: &str) -> Option<Record> {
        let idx = self.position(name)?;
        Some(self.records.remove(idx))
    }

    fn all(&self) -> Vec<&Record> {
        self.records.iter().collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
