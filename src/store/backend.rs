//! # Record Store Trait

use super::errors::{StoreError, StoreResult};
use super::record::Student;

/// Whole-collection storage for student records.
///
/// There is no incremental update: callers read everything, change one
/// record and write everything back.
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Read the full collection. Absent or empty storage is an empty collection.
    fn read_all(&self) -> StoreResult<Vec<Student>>;

    /// Replace the full collection.
    fn write_all(&self, students: &[Student]) -> StoreResult<()>;
}

/// Decode a stored collection. Blank input is an empty collection.
pub(crate) fn decode(path: &str, raw: &str) -> StoreResult<Vec<Student>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| StoreError::malformed(path, e))
}

/// Encode a collection as a 2-space indented JSON array.
pub(crate) fn encode(students: &[Student]) -> StoreResult<String> {
    serde_json::to_string_pretty(students).map_err(|e| StoreError::Io(e.to_string()))
}
