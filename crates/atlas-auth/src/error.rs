use atlas_core::{NetworkError, ReqwestErrorExt};
use thiserror::Error;

/// Authentication errors (login, session, token inspection).
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// The login service rejected the credentials. No detail is surfaced
    /// to the user beyond a generic message.
    #[error("Login rejected ({status})")]
    Rejected { status: u16 },

    /// An action requiring a session was attempted without one.
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid login response: {0}")]
    InvalidResponse(String),

    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Network(err.into_network_error())
    }
}

impl From<url::ParseError> for AuthError {
    fn from(err: url::ParseError) -> Self {
        AuthError::InvalidUrl(err.to_string())
    }
}

impl AuthError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::NotAuthenticated => "Please sign in first.",
            AuthError::Network(e) => e.user_message(),
            AuthError::Rejected { .. }
            | AuthError::InvalidResponse(_)
            | AuthError::InvalidToken(_)
            | AuthError::InvalidUrl(_) => "Login failed. Please try again.",
        }
    }
}
