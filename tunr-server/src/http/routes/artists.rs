//! Artist endpoints
//!
//! Full CRUD. Writes answer with a 303 redirect to the page showing the
//! result.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::get,
    Router,
};

use super::parse_id;
use crate::db::repos::{ArtistRepo, SongRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{DbConn, ValidForm};
use crate::http::server::AppState;
use crate::models::ArtistForm;
use crate::views::View;

fn artist_path(id: i32) -> String {
    format!("/artists/{}", id)
}

/// GET /artists - list all artists
async fn list_artists(mut conn: DbConn) -> Result<Html<String>, ApiError> {
    let artists = ArtistRepo::new(&mut conn).list().await?;
    Ok(View::ArtistsIndex { artists: &artists }.render())
}

/// GET /artists/new - creation form
async fn new_artist() -> Html<String> {
    View::ArtistsNew.render()
}

/// POST /artists/new - create an artist
async fn create_artist(
    State(state): State<Arc<AppState>>,
    ValidForm(form): ValidForm<ArtistForm>,
) -> Result<Redirect, ApiError> {
    let mut conn = DbConn::acquire(&state).await?;
    let artist = ArtistRepo::new(&mut conn).create(&form).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "artist created");

    Ok(Redirect::to(&artist_path(artist.id)))
}

/// GET /artists/{id}/edit - edit form
async fn edit_artist(mut conn: DbConn, Path(id): Path<String>) -> Result<Html<String>, ApiError> {
    let id = parse_id("artist", &id)?;
    let artist = ArtistRepo::new(&mut conn).get(id).await?;

    Ok(View::ArtistsEdit { artist: &artist }.render())
}

/// GET /artists/{id} - artist with their songs
async fn show_artist(mut conn: DbConn, Path(id): Path<String>) -> Result<Html<String>, ApiError> {
    let id = parse_id("artist", &id)?;
    let artist = ArtistRepo::new(&mut conn).get(id).await?;
    let songs = SongRepo::new(&mut conn).list_by_artist(id).await?;

    Ok(View::ArtistShow {
        artist: &artist,
        songs: &songs,
    }
    .render())
}

/// PUT /artists/{id} - overwrite an artist
async fn update_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidForm(form): ValidForm<ArtistForm>,
) -> Result<Redirect, ApiError> {
    let id = parse_id("artist", &id)?;
    let mut conn = DbConn::acquire(&state).await?;
    let artist = ArtistRepo::new(&mut conn).update(id, &form).await?;
    tracing::info!(artist_id = artist.id, "artist updated");

    Ok(Redirect::to(&artist_path(artist.id)))
}

/// DELETE /artists/{id} - delete an artist (songs are kept)
async fn delete_artist(mut conn: DbConn, Path(id): Path<String>) -> Result<Redirect, ApiError> {
    let id = parse_id("artist", &id)?;
    ArtistRepo::new(&mut conn).delete(id).await?;
    tracing::info!(artist_id = id, "artist deleted");

    Ok(Redirect::to("/artists"))
}

/// Artist routes
///
/// `/artists/new` is registered ahead of `/artists/{id}` and must stay that
/// way: "new" is never an artist id.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/new", get(new_artist).post(create_artist))
        .route("/artists/{id}/edit", get(edit_artist))
        .route(
            "/artists/{id}",
            get(show_artist).put(update_artist).delete(delete_artist),
        )
}
