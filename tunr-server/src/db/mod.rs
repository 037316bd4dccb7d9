//! Database layer - connection pool, migrations and repositories
//!
//! Repositories borrow a single connection for their lifetime. Handlers get
//! that connection from the per-request `DbConn` extractor, so every query a
//! request makes runs on one connection that is released when the request
//! finishes.

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, run_migrations, MIGRATOR};
pub use repos::*;
