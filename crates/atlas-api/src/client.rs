//! reqwest-backed client for the country backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use url::Url;

use crate::error::ApiError;
use crate::types::{Country, CreateCountryRequest, SavedCountry, WeatherListResponse};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Operations the weather view needs from the country backend.
///
/// The view model is written against this trait so the controller can be
/// exercised without a network.
#[async_trait]
pub trait CountryApi: Send + Sync {
    /// Look up country candidates by free-text query.
    async fn search(&self, query: &str) -> Result<Vec<Country>, ApiError>;

    /// Persist a country against the session identified by `token`.
    async fn create(&self, token: &str, request: &CreateCountryRequest) -> Result<(), ApiError>;

    /// Fetch the saved-countries-with-weather list for a user.
    async fn saved_with_weather(&self, user_id: i64) -> Result<Vec<SavedCountry>, ApiError>;
}

/// Country backend API client
#[derive(Debug, Clone)]
pub struct CountryClient {
    base_url: Url,
    client: Arc<Client>,
}

impl CountryClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: Arc::new(client),
        })
    }

    /// Check response status and extract error
    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CountryApi for CountryClient {
    async fn search(&self, query: &str) -> Result<Vec<Country>, ApiError> {
        tracing::debug!(%query, "Searching countries");

        let url = self.base_url.join("country/search")?;
        let response = self.client.get(url).query(&[("q", query)]).send().await?;
        let response = self.check_response(response).await?;

        let countries: Vec<Country> = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        tracing::debug!(count = countries.len(), "Search returned candidates");
        Ok(countries)
    }

    async fn create(&self, token: &str, request: &CreateCountryRequest) -> Result<(), ApiError> {
        tracing::debug!(country = %request.name, "Saving country");

        let url = self.base_url.join("country/create")?;
        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .json(request)
            .send()
            .await?;
        self.check_response(response).await?;

        tracing::info!(country = %request.name, "Country saved");
        Ok(())
    }

    async fn saved_with_weather(&self, user_id: i64) -> Result<Vec<SavedCountry>, ApiError> {
        tracing::debug!(user_id, "Fetching saved countries with weather");

        let url = self.base_url.join("country/weather")?;
        let response = self
            .client
            .get(url)
            .query(&[("userId", user_id)])
            .send()
            .await?;
        let response = self.check_response(response).await?;

        let envelope: WeatherListResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if !envelope.success {
            return Err(ApiError::Rejected(
                "weather list request was not successful".to_string(),
            ));
        }

        tracing::debug!(count = envelope.data.len(), "Fetched saved countries");
        Ok(envelope.data)
    }
}
