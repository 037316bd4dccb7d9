//! Route handlers organized by resource

pub mod artists;
pub mod health;
pub mod home;
pub mod songs;

use axum::http::Uri;

use super::error::ApiError;

/// Parse a numeric path id. Anything that is not an id cannot match a row.
pub(crate) fn parse_id(resource: &'static str, raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound {
        resource,
        id: raw.to_owned(),
    })
}

/// Fallback for unmatched paths
pub(crate) async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: "page",
        id: uri.path().to_owned(),
    }
}
