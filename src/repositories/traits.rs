use crate::models::Record;

/// Storage for contact records, keyed by name.
///
/// Provides abstraction over where records live so the service layer
/// can be exercised against any implementation.
pub trait ContactRepository {
    /// Insert a record under its name, replacing any record already
    /// filed there.
    fn add_record(&mut self, record: Record);

    /// Look up a record by exact name.
    fn find(&self, name: &str) -> Option<&Record>;

    /// Look up a record by exact name for modification.
    fn find_mut(&mut self, name: &str) -> Option<&mut Record>;

    /// Remove the record filed under `name`. Returns the removed record,
    /// or `None` if there was nothing to remove.
    fn delete(&mut self, name: &str) -> Option<Record>;

    /// All records in the order their names were first inserted.
    fn all(&self) -> Vec<&Record>;

    /// Number of records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
