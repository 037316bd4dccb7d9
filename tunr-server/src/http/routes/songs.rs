//! Song endpoints (read-only)

use std::sync::Arc;

use axum::{extract::Path, response::Html, routing::get, Router};

use super::parse_id;
use crate::db::repos::SongRepo;
use crate::http::error::ApiError;
use crate::http::extractors::DbConn;
use crate::http::server::AppState;
use crate::views::View;

/// GET /songs - list all songs
async fn list_songs(mut conn: DbConn) -> Result<Html<String>, ApiError> {
    let songs = SongRepo::new(&mut conn).list().await?;
    Ok(View::SongsIndex { songs: &songs }.render())
}

/// GET /songs/{id} - a single song
async fn show_song(mut conn: DbConn, Path(id): Path<String>) -> Result<Html<String>, ApiError> {
    let id = parse_id("song", &id)?;
    let song = SongRepo::new(&mut conn).get(id).await?;

    Ok(View::SongShow { song: &song }.render())
}

/// Song routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/songs", get(list_songs))
        .route("/songs/{id}", get(show_song))
}
