use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the backend client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured backend URL is not an absolute http(s) URL
    #[error("invalid backend URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response (connection refused, DNS, ...)
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("{message} (HTTP {status})")]
    Status { status: StatusCode, message: String },

    /// The response body did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failure, if the backend answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human readable message, preferring the backend's own wording
    pub fn message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_backend_message() {
        let err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            message: "Hotel or Theme not found".to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.message(), "Hotel or Theme not found");
        assert_eq!(err.to_string(), "Hotel or Theme not found (HTTP 404 Not Found)");
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let err = ApiError::Decode("expected array".to_string());
        assert_eq!(err.status(), None);
        assert!(err.message().contains("expected array"));
    }

    #[test]
    fn test_invalid_url_message() {
        let err = ApiError::InvalidUrl("'localhost:3001/' has unsupported scheme 'localhost'".to_string());
        assert_eq!(err.status(), None);
        assert!(err.message().starts_with("invalid backend URL:"));
    }
}
