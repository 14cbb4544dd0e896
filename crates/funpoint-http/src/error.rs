//! HTTP error types for the callback shell

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Transport-level errors for callback handling
///
/// Only malformed transport (an undecodable body) lands here. A failed
/// MAC verification is not an error - it is answered with the
/// [`CallbackAck::MacError`] body at HTTP 200.
///
/// [`CallbackAck::MacError`]: crate::CallbackAck::MacError
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to parse callback body: {0}")]
    ParseError(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::ParseError(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        }
    }
}
