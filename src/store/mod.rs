//! # Record Store Module
//!
//! Durable storage for the student collection.
//!
//! - `RecordStore`: whole-collection read/write seam
//! - `JsonFileStore`: pretty-printed JSON file, replaced atomically on write
//! - `MemoryStore`: in-process store for tests and embedding
//! - `IdProvider`: where new student ids come from

mod backend;
mod errors;
mod file;
mod ids;
mod memory;
mod record;

pub use backend::RecordStore;
pub use errors::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use ids::{IdProvider, SequentialIds, TimestampIds};
pub use memory::MemoryStore;
pub use record::{position_of, Student, StudentId};
