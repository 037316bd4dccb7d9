//! Repository implementations for database access
//!
//! One repository per table. Each borrows a live connection rather than the
//! pool, so callers decide how long that connection is held.

pub mod artists;
pub mod songs;

pub use artists::{Artist, ArtistRepo};
pub use songs::{NewSong, Song, SongRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
