//! Student record as persisted and as returned over HTTP

use serde::{Deserialize, Serialize};

/// Numeric student identifier
pub type StudentId = u64;

/// A single student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub course: String,
}

impl Student {
    /// Whether this record answers to the given path identifier.
    ///
    /// Matching is done on the decimal string form of the id, so `"42"`
    /// matches 42 but `"042"` and `"42.0"` do not.
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.to_string() == id
    }
}

/// Index of the first student matching `id`, if any
pub fn position_of(students: &[Student], id: &str) -> Option<usize> {
    students.iter().position(|s| s.matches_id(id))
}
