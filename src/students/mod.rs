//! # Students Module
//!
//! CRUD over the student collection, independent of HTTP routing.
//!
//! - `payload`: body decoding and validation
//! - `service`: list/get/create/update/delete against a `RecordStore`
//! - `errors`: error taxonomy and its HTTP mapping

pub mod errors;
pub mod payload;
pub mod service;

pub use errors::{ApiError, ApiResult, MessageResponse};
pub use payload::{parse_body, NewStudent, StudentPatch, ValidationError};
pub use service::StudentService;
