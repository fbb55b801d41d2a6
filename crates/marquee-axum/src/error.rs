//! Axum-specific error types and mappings.
//!
//! JSON endpoints report failures with the same envelope the search API
//! uses for success, so clients can branch on `success` alone.

use std::any::Any;

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::SearchError;
use thiserror::Error;

use crate::dto::SearchFailure;

/// Message returned when a request fails for reasons the caller cannot fix.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Something went wrong while searching the catalog. Please try again later.";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the caller.
    ///
    /// Internal details are logged, never returned.
    pub fn public_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(detail) => tracing::error!("Request failed: {}", detail),
            Self::BadRequest(_) => tracing::warn!("Request rejected: {}", self),
        }
        let body = SearchFailure::new(self.public_message());
        (status, axum::Json(body)).into_response()
    }
}

impl From<SearchError> for HttpError {
    fn from(err: SearchError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Response for a panic caught inside a JSON handler.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    HttpError::Internal(detail.to_string()).into_response()
}
