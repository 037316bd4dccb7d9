//! Artist repository
//!
//! Straight passthroughs to the `artists` table. Writes are single
//! statements; nothing here touches `songs`.

use serde::Serialize;
use sqlx::{FromRow, PgConnection};

use super::DbError;
use crate::models::ArtistForm;

/// Artist record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub photo_url: String,
    pub nationality: String,
}

/// Artist repository
pub struct ArtistRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> ArtistRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// List every artist in id order.
    pub async fn list(&mut self) -> Result<Vec<Artist>, DbError> {
        let artists = sqlx::query_as::<_, Artist>(
            "SELECT id, name, photo_url, nationality FROM artists ORDER BY id",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(artists)
    }

    /// Get a single artist by id.
    pub async fn get(&mut self, id: i32) -> Result<Artist, DbError> {
        sqlx::query_as::<_, Artist>(
            "SELECT id, name, photo_url, nationality FROM artists WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| DbError::not_found("artist", id))
    }

    /// Insert a new artist. Field values are stored exactly as submitted.
    pub async fn create(&mut self, form: &ArtistForm) -> Result<Artist, DbError> {
        let artist = sqlx::query_as::<_, Artist>(
            r#"
            INSERT INTO artists (name, photo_url, nationality)
            VALUES ($1, $2, $3)
            RETURNING id, name, photo_url, nationality
            "#,
        )
        .bind(&form.name)
        .bind(&form.photo_url)
        .bind(&form.nationality)
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(artist_id = artist.id, "artist created");
        Ok(artist)
    }

    /// Overwrite all three fields of an existing artist.
    pub async fn update(&mut self, id: i32, form: &ArtistForm) -> Result<Artist, DbError> {
        let artist = sqlx::query_as::<_, Artist>(
            r#"
            UPDATE artists
            SET name = $2, photo_url = $3, nationality = $4
            WHERE id = $1
            RETURNING id, name, photo_url, nationality
            "#,
        )
        .bind(id)
        .bind(&form.name)
        .bind(&form.photo_url)
        .bind(&form.nationality)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| DbError::not_found("artist", id))?;

        tracing::debug!(artist_id = id, "artist updated");
        Ok(artist)
    }

    /// Delete an artist. Songs pointing at it are left untouched.
    pub async fn delete(&mut self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("artist", id));
        }

        tracing::debug!(artist_id = id, "artist deleted");
        Ok(())
    }
}
