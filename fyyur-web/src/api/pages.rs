//! Home page and unknown-route fallback

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tracing::debug;

use crate::ui::pages::{home_page, not_found_page};
use crate::AppState;

/// GET /
pub async fn index() -> Html<String> {
    Html(home_page(None))
}

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!(path = %uri.path(), "No route matched");
    (StatusCode::NOT_FOUND, Html(not_found_page()))
}

pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}
