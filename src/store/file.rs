//! # JSON File Store
//!
//! Keeps the whole collection in one pretty-printed JSON file. Writes go to
//! a sibling temp file which is then renamed over the target, so a reader
//! never sees a half-written collection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::backend::{decode, encode, RecordStore};
use super::errors::{StoreError, StoreResult};
use super::record::Student;

/// File-backed record store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file. Nothing is touched on disk yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file holding an empty collection.
    ///
    /// Fails with `AlreadyExists` when the file is present, unless `force`.
    pub fn init(&self, force: bool) -> StoreResult<()> {
        if self.path.exists() && !force {
            return Err(StoreError::AlreadyExists(self.display_path()));
        }
        self.write_all(&[])
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "students.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordStore for JsonFileStore {
    fn read_all(&self) -> StoreResult<Vec<Student>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::from(e)),
        };
        decode(&self.display_path(), &raw)
    }

    fn write_all(&self, students: &[Student]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let body = encode(students)?;
        let tmp = self.temp_path();
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            StoreError::from(e)
        })
    }
}
