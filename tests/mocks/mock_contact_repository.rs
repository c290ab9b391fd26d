use assistant_bot::models::Record;
use assistant_bot::repositories::ContactRepository;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// seeded with test data and tracks method calls for verification.
/// Records are kept in name order rather than insertion order.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    records: BTreeMap<String, Record>,
    call_counts: Mutex<BTreeMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record without counting it as a call.
    pub fn with_record(mut self, record: Record) -> Self {
        self.records
            .insert(record.name().as_str().to_string(), record);
        self
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn add_record(&mut self, record: Record) {
        self.track_call("add_record");
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    fn find(&self, name: &str) -> Option<&Record> {
        self.track_call("find");
        self.records.get(name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.track_call("find_mut");
        self.records.get_mut(name)
    }

    fn delete(&mut self, name: &str) -> Option<Record> {
        self.track_call("delete");
        self.records.remove(name)
    }

    fn all(&self) -> Vec<&Record> {
        self.track_call("all");
        self.records.values().collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
