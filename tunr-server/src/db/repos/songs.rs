//! Song repository
//!
//! Read access to `songs`, plus the insert used for seeding. `artist_id` is
//! not constrained, so a song may point at an artist that no longer exists.

use serde::Serialize;
use sqlx::{FromRow, PgConnection};

use super::DbError;

/// Song record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Song {
    pub id: i32,
    pub artist_id: i32,
    pub title: String,
    pub album: String,
    pub preview_url: String,
}

/// Song to insert
#[derive(Debug, Clone)]
pub struct NewSong {
    pub artist_id: i32,
    pub title: String,
    pub album: String,
    pub preview_url: String,
}

/// Song repository
pub struct SongRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> SongRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// List every song in id order.
    pub async fn list(&mut self) -> Result<Vec<Song>, DbError> {
        let songs = sqlx::query_as::<_, Song>(
            "SELECT id, artist_id, title, album, preview_url FROM songs ORDER BY id",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(songs)
    }

    /// Get a single song by id.
    pub async fn get(&mut self, id: i32) -> Result<Song, DbError> {
        sqlx::query_as::<_, Song>(
            "SELECT id, artist_id, title, album, preview_url FROM songs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| DbError::not_found("song", id))
    }

    /// List the songs of one artist.
    pub async fn list_by_artist(&mut self, artist_id: i32) -> Result<Vec<Song>, DbError> {
        let songs = sqlx::query_as::<_, Song>(
            r#"
            SELECT id, artist_id, title, album, preview_url
            FROM songs
            WHERE artist_id = $1
            ORDER BY id
            "#,
        )
        .bind(artist_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(songs)
    }

    /// Insert a song.
    pub async fn insert(&mut self, song: &NewSong) -> Result<Song, DbError> {
        let song = sqlx::query_as::<_, Song>(
            r#"
            INSERT INTO songs (artist_id, title, album, preview_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, artist_id, title, album, preview_url
            "#,
        )
        .bind(song.artist_id)
        .bind(&song.title)
        .bind(&song.album)
        .bind(&song.preview_url)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(song)
    }
}
