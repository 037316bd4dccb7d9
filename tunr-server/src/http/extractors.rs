//! Custom Axum extractors

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::Form;
use serde::de::DeserializeOwned;
use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};

use super::error::ApiError;
use super::server::AppState;
use crate::models::ValidationError;

/// One database connection held for the duration of a request.
///
/// Acquired from the pool before the handler runs and handed back when the
/// handler's future is dropped, whether it returned a page or an error.
///
/// Handlers that read a request body call [`DbConn::acquire`] after the body
/// has parsed, so no connection is held while the body streams in.
pub struct DbConn(PoolConnection<Postgres>);

impl DbConn {
    pub async fn acquire(state: &AppState) -> Result<Self, ApiError> {
        let conn = state.pool.acquire().await?;
        tracing::trace!("database connection acquired");
        Ok(Self(conn))
    }
}

impl FromRequestParts<Arc<AppState>> for DbConn {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Self::acquire(state).await
    }
}

impl Deref for DbConn {
    type Target = PgConnection;

    fn deref(&self) -> &PgConnection {
        &self.0
    }
}

impl DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut PgConnection {
        &mut self.0
    }
}

impl Drop for DbConn {
    fn drop(&mut self) {
        tracing::trace!("database connection released");
    }
}

/// Form body extractor that reports decoding failures as validation errors.
pub struct ValidForm<T>(pub T);

impl<S, T> FromRequest<S> for ValidForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(form_rejection)?;

        Ok(Self(value))
    }
}

/// Only deserialization failures can name a missing field; content-type and
/// body read failures are always malformed.
fn form_rejection(rejection: FormRejection) -> ValidationError {
    match rejection {
        FormRejection::FailedToDeserializeForm(_)
        | FormRejection::FailedToDeserializeFormBody(_) => {
            ValidationError::from_form_error(&rejection.body_text())
        }
        other => ValidationError::Malformed {
            reason: other.body_text(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;

    use crate::models::ArtistForm;

    fn form_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/artists/new")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn complete_form_is_accepted() {
        let ValidForm(form) = ValidForm::<ArtistForm>::from_request(
            form_request("name=Prince&photo_url=http%3A%2F%2Fx%2Fp.jpg&nationality=American"),
            &(),
        )
        .await
        .unwrap();

        assert_eq!(form.photo_url, "http://x/p.jpg");
    }

    #[tokio::test]
    async fn empty_values_are_accepted() {
        let ValidForm(form) = ValidForm::<ArtistForm>::from_request(
            form_request("name=&photo_url=&nationality="),
            &(),
        )
        .await
        .unwrap();

        assert_eq!(form.name, "");
    }

    #[tokio::test]
    async fn wrong_content_type_is_malformed() {
        let request = Request::builder()
            .method("POST")
            .uri("/artists/new")
            .header(CONTENT_TYPE, "text/plain")
            .body(Body::from("missing field `name`"))
            .unwrap();

        let result = ValidForm::<ArtistForm>::from_request(request, &()).await;
        assert!(matches!(
            result,
            Err(ApiError::Validation(ValidationError::Malformed { .. }))
        ));
    }

    #[tokio::test]
    async fn missing_field_is_validation_error() {
        let request = form_request("name=Prince&photo_url=x");
        let result = ValidForm::<ArtistForm>::from_request(request, &()).await;

        match result {
            Err(ApiError::Validation(ValidationError::Missing { field })) => {
                assert_eq!(field, "nationality")
            }
            _ => panic!("expected missing field error"),
        }
    }
}
