/// The outcome of an insert-if-absent operation. Duplicate checks are check-then-insert on a single connection, not
/// unique constraints, so `AlreadyExists` reflects the state at check time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertRecordResult {
    /// The record was inserted with the given id.
    Inserted(i64),
    /// A matching record already existed and nothing was written.
    AlreadyExists,
}

impl InsertRecordResult {
    pub fn inserted_id(&self) -> Option<i64> {
        match self {
            InsertRecordResult::Inserted(id) => Some(*id),
            InsertRecordResult::AlreadyExists => None,
        }
    }
}
