//! # In-Memory Store
//!
//! Holds the encoded collection rather than live records, so every read
//! hands back a fresh copy just like the file store does.

use std::sync::RwLock;

use super::backend::{decode, encode, RecordStore};
use super::errors::{StoreError, StoreResult};
use super::record::Student;

const MEMORY_PATH: &str = "<memory>";

/// Record store kept entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: RwLock<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw stored text, as if it had been read from disk.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RwLock::new(raw.into()),
        }
    }
}

impl RecordStore for MemoryStore {
    fn read_all(&self) -> StoreResult<Vec<Student>> {
        let raw = self
            .raw
            .read()
            .map_err(|_| StoreError::Io("memory store lock poisoned".to_string()))?;
        decode(MEMORY_PATH, &raw)
    }

    fn write_all(&self, students: &[Student]) -> StoreResult<()> {
        let body = encode(students)?;
        let mut raw = self
            .raw
            .write()
            .map_err(|_| StoreError::Io("memory store lock poisoned".to_string()))?;
        *raw = body;
        Ok(())
    }
}
