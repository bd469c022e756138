//! Error types for fyyur-web
//!
//! Handler errors render an HTML error page: missing records get the 404
//! page, everything else the generic 500 page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::ui;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// fyyur-common error
    #[error(transparent)]
    Common(#[from] fyyur_common::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::Common(fyyur_common::Error::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            (status, Html(ui::pages::not_found_page())).into_response()
        } else {
            error!(error = %self, "Request failed");
            (status, Html(ui::pages::server_error_page())).into_response()
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
