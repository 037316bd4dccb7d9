//! `_method` override for HTML forms
//!
//! Browsers only submit GET and POST. A POST carrying `_method=put` or
//! `_method=delete` in a urlencoded body, or an `X-HTTP-Method-Override`
//! header, is re-issued with that method before routing.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderName, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use crate::models::ValidationError;

/// Largest form body buffered while looking for `_method`; axum's default
/// request body limit.
const MAX_FORM_BYTES: usize = 2 * 1024 * 1024;

const OVERRIDE_KEY: &str = "_method";

const OVERRIDE_HEADER: HeaderName = HeaderName::from_static("x-http-method-override");

/// Middleware rewriting the request method from a `_method` parameter.
pub async fn method_override(request: Request, next: Next) -> Response {
    if request.method() != Method::POST {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();

    if let Some(method) = parts
        .headers
        .get(OVERRIDE_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_method)
    {
        tracing::debug!(%method, uri = %parts.uri, "method override from header");
        parts.method = method;
        return next.run(Request::from_parts(parts, body)).await;
    }

    if !is_urlencoded(&parts.headers) {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let bytes = match to_bytes(body, MAX_FORM_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return ApiError::Validation(ValidationError::Malformed {
                reason: err.to_string(),
            })
            .into_response()
        }
    };

    if let Some(method) = std::str::from_utf8(&bytes).ok().and_then(override_method) {
        tracing::debug!(%method, uri = %parts.uri, "method override from form");
        parts.method = method;
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn is_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

/// Find `_method` in urlencoded pairs.
fn override_method(encoded: &str) -> Option<Method> {
    let value = encoded.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == OVERRIDE_KEY).then_some(value)
    })?;

    parse_method(value)
}

/// Only PUT, PATCH and DELETE may be requested.
fn parse_method(value: &str) -> Option<Method> {
    match value.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_override_anywhere_in_pairs() {
        assert_eq!(override_method("_method=put"), Some(Method::PUT));
        assert_eq!(
            override_method("name=Prince&_method=DELETE&x=1"),
            Some(Method::DELETE)
        );
    }

    #[test]
    fn ignores_unknown_or_absent_methods() {
        assert_eq!(override_method("name=Prince"), None);
        assert_eq!(override_method("_method=get"), None);
        assert_eq!(override_method("_method=trace"), None);
        assert_eq!(override_method("method=put"), None);
    }

    #[test]
    fn header_values_parse() {
        assert_eq!(parse_method("delete"), Some(Method::DELETE));
        assert_eq!(parse_method(" PUT "), Some(Method::PUT));
        assert_eq!(parse_method("POST"), None);
    }

    #[test]
    fn urlencoded_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_urlencoded(&headers));

        headers.insert(
            CONTENT_TYPE,
            "application/x-www-form-urlencoded; charset=utf-8".parse().unwrap(),
        );
        assert!(is_urlencoded(&headers));
    }
}
