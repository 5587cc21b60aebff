//! HTTP client for the country backend.
//!
//! Exposes the `CountryApi` trait the weather view is written against,
//! plus the reqwest-backed `CountryClient` used in production.

pub mod client;
pub mod error;
pub mod types;

pub use client::{CountryApi, CountryClient};
pub use error::ApiError;
pub use types::{Country, CreateCountryRequest, SavedCountry, WeatherListResponse};
