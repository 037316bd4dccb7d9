//! Home page

use axum::{response::Html, routing::get, Router};

use crate::views::View;

/// GET /
async fn home() -> Html<String> {
    View::Home.render()
}

/// Home routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}
