//! Error type for the relay pipeline.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Everything that can end a request before the filtered calendar is sent.
///
/// The `Display` text is sent verbatim as the plain-text response body.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Missing or undecodable target in the request path
    #[error("{0}")]
    InvalidInput(String),

    /// Target host or endpoint is not allowed
    #[error("{0}")]
    Forbidden(String),

    /// Per-minute ceiling reached
    #[error("Rate limit exceeded. Try again later.")]
    RateLimited,

    /// Network failure or non-200 answer from the upstream
    #[error("Error fetching URL: {0}")]
    Upstream(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ProxyError {
    // network failure or non-200, not a bad body
    pub fn is_upstream(&self) -> bool {
        matches!(self, ProxyError::Upstream(_))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ProxyError::Forbidden(_) => StatusCode::FORBIDDEN,
            ProxyError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ProxyError::Upstream(_) | ProxyError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }
        (status, self.to_string()).into_response()
    }
}
