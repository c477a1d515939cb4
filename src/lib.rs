//! rollcall - a student registry REST service backed by a JSON file
//!
//! ## Modules
//!
//! - **`store`**: whole-collection persistence (`RecordStore`) and id providers
//! - **`students`**: CRUD operations, request validation and the error taxonomy
//! - **`http_server`**: Axum routes, CORS, request tracing and the listener
//! - **`cli`**: argument parsing, configuration loading and command dispatch

pub mod cli;
pub mod http_server;
pub mod store;
pub mod students;
