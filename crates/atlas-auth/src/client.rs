//! Login client for the auth service.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::claims;
use crate::crypto;
use crate::error::AuthError;
use crate::session::Session;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Serialize)]
struct LoginRequest {
    email: String,
    /// Sealed with the pre-shared key, never the plaintext.
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: TokenEnvelope,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenEnvelope {
    access_token: String,
}

/// Auth service API client
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: Url,
    client: Arc<Client>,
    password_key: String,
}

impl AuthClient {
    /// Create a new client for the given base URL and pre-shared key.
    pub fn new(base_url: &str, password_key: &str) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: Arc::new(client),
            password_key: password_key.to_string(),
        })
    }

    /// Exchange credentials for a session.
    ///
    /// The password is sealed client-side before transmission; the user id
    /// is read from the returned access token's claims.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        tracing::debug!(%email, "Logging in");

        let body = LoginRequest {
            email: email.to_string(),
            password: crypto::seal_password(password, &self.password_key),
        };

        let url = self.base_url.join("user/login")?;
        let response = self.client.post(url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Login rejected");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
            });
        }

        let parsed: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        let token = parsed.token.access_token;
        let user_id = claims::user_id_from_token(&token)?;

        tracing::info!(user_id, "Login succeeded");
        Ok(Session { token, user_id })
    }
}
