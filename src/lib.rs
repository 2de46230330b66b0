//! # Libreria Backend Library
//!
//! This is the core library for Libreria, a REST API over the `libro` table
//! of a MySQL database with bundled Swagger documentation.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: Modern web framework for HTTP server and routing
//! - **SQLx**: Asynchronous database operations with MySQL
//! - **Tokio**: Async runtime for concurrent operations
//! - **Serde**: Serialization/deserialization for JSON APIs
//! - **Utoipa**: OpenAPI document generation and the embedded Swagger UI
//!
//! ## Core Components
//!
//! - [`config`]: Application configuration management
//! - [`db`]: Connection pool setup and schema bootstrap
//! - [`docs`]: OpenAPI document served under `/api-docs`
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`routes`]: HTTP API endpoint handlers
//! - [`state`]: Shared application state
//! - [`types`]: Data transfer objects and shared type definitions

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
