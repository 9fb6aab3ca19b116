//! Error taxonomy for the StudyMatch REST client
//!
//! Every client call fails with exactly one of these variants. The set is
//! closed: callers match on it to decide what to show, never to retry.

use thiserror::Error;

/// Result alias for REST client calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL or endpoint string does not form a valid URL
    #[error("The URL provided was invalid: {0}")]
    BadUrl(String),

    /// Transport failure: connection refused, DNS, TLS, timeout
    #[error("The request failed. Please check your internet connection. ({0})")]
    RequestFailed(String),

    /// The server answered with an unacceptable status code
    #[error("HTTP Error: {0}.")]
    Http(u16),

    /// The server answered successfully but with an empty body
    #[error("No data received from the server.")]
    MissingData,

    /// The body does not match the expected schema
    #[error("Failed to decode the server response: {0}")]
    Decoding(String),

    /// The request payload or headers could not be serialized
    #[error("Failed to encode the request payload: {0}")]
    Encoding(String),
}

impl ApiError {
    /// Status code carried by an HTTP error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http(code) => Some(*code),
            _ => None,
        }
    }

    /// Whether the failure happened before or during transport
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::RequestFailed(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            ApiError::BadUrl(e.to_string())
        } else if e.is_timeout() {
            ApiError::RequestFailed("Request timed out".to_string())
        } else if let Some(status) = e.status() {
            ApiError::Http(status.as_u16())
        } else {
            ApiError::RequestFailed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_http() {
        assert_eq!(ApiError::Http(404).status(), Some(404));
        assert_eq!(ApiError::MissingData.status(), None);
        assert_eq!(ApiError::Decoding("x".into()).status(), None);
    }

    #[test]
    fn test_http_display_includes_code() {
        assert_eq!(ApiError::Http(500).to_string(), "HTTP Error: 500.");
    }

    #[test]
    fn test_is_transport() {
        assert!(ApiError::RequestFailed("refused".into()).is_transport());
        assert!(!ApiError::Http(503).is_transport());
    }
}
