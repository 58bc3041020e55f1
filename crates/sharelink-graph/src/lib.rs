//! sharelink Graph - Microsoft Graph API client
//!
//! Provides an async client for the handful of Graph endpoints sharelink needs:
//! - `GET /shares/{id}/driveItem` - resolve a share token to a drive item
//! - `GET /me/drive/items/{id}` - fetch a drive item with its parent path
//! - `GET /me` - the authenticated user's profile
//!
//! ## Modules
//!
//! - [`client`] - Microsoft Graph API HTTP client
//! - [`provider`] - Port implementations on top of the client

pub mod client;
pub mod provider;

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when communicating with the Microsoft Graph API
#[derive(Debug, Error)]
pub enum GraphError {
    /// Authentication credentials are invalid or expired
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Insufficient permissions for the requested operation
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded; the caller may retry after the specified duration
    #[error("Too many requests, retry after {retry_after:?}")]
    TooManyRequests {
        /// Duration the server asked us to wait
        retry_after: Option<Duration>,
    },

    /// A server-side error occurred (5xx)
    #[error("Server error: {0}")]
    ServerError(String),

    /// A network-level error occurred
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The API response could not be parsed or was malformed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GraphError {
    /// Classifies a non-success HTTP status
    ///
    /// `detail` is the request description or error body to carry along.
    pub fn from_status(status: StatusCode, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(detail),
            StatusCode::FORBIDDEN => Self::Forbidden(detail),
            StatusCode::NOT_FOUND => Self::NotFound(detail),
            StatusCode::TOO_MANY_REQUESTS => Self::TooManyRequests { retry_after: None },
            s if s.is_server_error() => Self::ServerError(format!("{s}: {detail}")),
            s => Self::InvalidResponse(format!("unexpected status {s}: {detail}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            GraphError::from_status(StatusCode::UNAUTHORIZED, "x"),
            GraphError::Unauthorized(_)
        ));
        assert!(matches!(
            GraphError::from_status(StatusCode::FORBIDDEN, "x"),
            GraphError::Forbidden(_)
        ));
        assert!(matches!(
            GraphError::from_status(StatusCode::NOT_FOUND, "x"),
            GraphError::NotFound(_)
        ));
        assert!(matches!(
            GraphError::from_status(StatusCode::TOO_MANY_REQUESTS, "x"),
            GraphError::TooManyRequests { .. }
        ));
        assert!(matches!(
            GraphError::from_status(StatusCode::BAD_GATEWAY, "x"),
            GraphError::ServerError(_)
        ));
        assert!(matches!(
            GraphError::from_status(StatusCode::BAD_REQUEST, "x"),
            GraphError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_error_display() {
        let err = GraphError::NotFound("GET /shares/s!A/driveItem".to_string());
        assert_eq!(err.to_string(), "Not found: GET /shares/s!A/driveItem");
    }
}
