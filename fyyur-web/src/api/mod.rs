//! HTTP handlers for fyyur-web
//!
//! Read handlers return `ApiResult` and let [`ApiError`] pick the error
//! page. Write handlers render their own outcome: 422 with the form for
//! rejected input, 500 with a notice when persistence fails.

pub mod artists;
pub mod health;
pub mod pages;
pub mod shows;
pub mod venues;

pub use artists::artist_routes;
pub use health::health_routes;
pub use pages::{not_found, page_routes};
pub use shows::show_routes;
pub use venues::venue_routes;

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::warn;

use crate::ui::Notice;
use crate::{ApiError, ApiResult};

/// Parse a path id; anything that is not an integer names no record
pub(crate) fn parse_id(kind: &str, raw: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("{} {}", kind, raw)))
}

/// Unwrap a decoded form body
///
/// A body that cannot be decoded (wrong content type, repeated field) yields
/// the rejection's status and a notice for re-rendering an empty form.
pub(crate) fn read_form<T>(
    payload: Result<Form<T>, FormRejection>,
) -> Result<T, (StatusCode, Notice)> {
    payload.map(|Form(form)| form).map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Form body rejected");
        (
            rejection.status(),
            Notice::error(format!(
                "The submitted form could not be read: {}",
                rejection.body_text()
            )),
        )
    })
}

/// HTML response with an explicit status
pub(crate) fn html(status: StatusCode, body: String) -> Response {
    (status, Html(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("Venue", "12").unwrap(), 12);
        assert!(matches!(parse_id("Venue", "abc"), Err(ApiError::NotFound(_))));
        assert!(matches!(parse_id("Venue", ""), Err(ApiError::NotFound(_))));
    }
}
