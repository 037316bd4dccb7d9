//! tunr-server: HTML catalog of music artists and their songs
//!
//! Artists get full create/read/update/delete over plain HTML forms; songs
//! are read-only and shown per artist on the artist page. State lives in
//! PostgreSQL, reached through [`db::repos`].

pub mod db;
pub mod http;
pub mod models;
pub mod views;

pub use db::{create_pool, create_pool_with_options, run_migrations, MIGRATOR};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
