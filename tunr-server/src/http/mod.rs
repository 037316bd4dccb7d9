//! HTTP server layer
//!
//! Axum server with:
//! - HTML pages rendered by [`crate::views`]
//! - One pooled connection per request ([`extractors::DbConn`])
//! - `_method` override so HTML forms can issue PUT and DELETE
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod method_override;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
