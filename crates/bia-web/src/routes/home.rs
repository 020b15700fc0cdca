//! Form page route handler.
//!
//! Serves the embedded query form HTML.

use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the analysis form.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}
