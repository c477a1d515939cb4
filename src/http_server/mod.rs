//! # HTTP Server Module
//!
//! Axum server for the student registry.
//!
//! # Endpoints
//!
//! - `/health` - Liveness check
//! - `/students` - List and create students
//! - `/students/:id` - Get, update and delete one student

pub mod config;
pub mod health_routes;
pub mod server;
pub mod student_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
