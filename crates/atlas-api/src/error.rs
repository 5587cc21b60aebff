use atlas_core::{NetworkError, ReqwestErrorExt};
use thiserror::Error;

/// Country backend errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The weather endpoint answered `success: false`.
    #[error("Server rejected request: {0}")]
    Rejected(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.into_network_error())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

impl ApiError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Network(e) => e.user_message(),
            ApiError::Status { status, .. } if *status >= 500 => {
                "The server is experiencing issues. Please try again later."
            }
            ApiError::Status { .. } | ApiError::Rejected(_) => {
                "The request failed. Please try again."
            }
            ApiError::InvalidResponse(_) | ApiError::InvalidUrl(_) => {
                "Received an unexpected response. Please try again."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 401,
            message: "unauthorized".into(),
        };
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("unauthorized"));
    }

    #[test]
    fn test_network_error_converts() {
        let err: ApiError = NetworkError::Timeout.into();
        assert!(matches!(err, ApiError::Network(NetworkError::Timeout)));
    }
}
