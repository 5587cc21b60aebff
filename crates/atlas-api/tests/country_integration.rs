//! Integration tests for CountryClient using wiremock.
//!
//! These tests verify the client behavior against a mock HTTP server.

use atlas_api::{CountryApi, CountryClient, CreateCountryRequest};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a search result entry
fn search_hit(name: &str, lat: f64, long: f64) -> serde_json::Value {
    serde_json::json!({ "name": name, "lat": lat, "long": long })
}

/// Helper to create a saved country with weather
fn saved_country(name: &str, temperature: f64, description: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "latitude": 46.2,
        "longitude": 2.2,
        "temperature": temperature,
        "description": description
    })
}

#[tokio::test]
async fn test_search_returns_candidates_in_server_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/country/search"))
        .and(query_param("q", "fra"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            search_hit("France", 46.2, 2.2),
            search_hit("French Polynesia", -17.6, -149.4),
        ])))
        .mount(&mock_server)
        .await;

    let client = CountryClient::new(&mock_server.uri()).unwrap();
    let countries = client.search("fra").await.unwrap();

    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].name, "France");
    assert_eq!(countries[0].latitude, 46.2);
    assert_eq!(countries[1].name, "French Polynesia");
}

#[tokio::test]
async fn test_search_empty_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/country/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = CountryClient::new(&mock_server.uri()).unwrap();
    let countries = client.search("zzz").await.unwrap();

    assert!(countries.is_empty());
}

#[tokio::test]
async fn test_search_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/country/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = CountryClient::new(&mock_server.uri()).unwrap();
    let result = client.search("fra").await;

    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("500"), "Error should mention 500 status: {}", err);
}

#[tokio::test]
async fn test_create_sends_bearer_token_and_full_coordinates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/country/create"))
        .and(header("Authorization", "Bearer session-token"))
        .and(body_json(serde_json::json!({
            "name": "France",
            "latitude": 46.2,
            "longitude": 2.2
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CountryClient::new(&mock_server.uri()).unwrap();
    let request = CreateCountryRequest {
        name: "France".to_string(),
        latitude: 46.2,
        longitude: 2.2,
    };

    client.create("session-token", &request).await.unwrap();
}

#[tokio::test]
async fn test_create_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/country/create"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&mock_server)
        .await;

    let client = CountryClient::new(&mock_server.uri()).unwrap();
    let request = CreateCountryRequest {
        name: "France".to_string(),
        latitude: 46.2,
        longitude: 2.2,
    };

    let result = client.create("stale-token", &request).await;
    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("401"), "Error should mention 401 status: {}", err);
}

#[tokio::test]
async fn test_weather_list_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/country/weather"))
        .and(query_param("userId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [
                saved_country("France", 18.5, "light rain"),
                saved_country("Germany", 14.0, "overcast clouds"),
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = CountryClient::new(&mock_server.uri()).unwrap();
    let saved = client.saved_with_weather(7).await.unwrap();

    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].name, "France");
    assert_eq!(saved[0].temperature, 18.5);
    assert_eq!(saved[1].description, "overcast clouds");
}

#[tokio::test]
async fn test_weather_list_unsuccessful_envelope_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/country/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "success": false, "data": [] })),
        )
        .mount(&mock_server)
        .await;

    let client = CountryClient::new(&mock_server.uri()).unwrap();
    let result = client.saved_with_weather(7).await;

    assert!(matches!(result, Err(atlas_api::ApiError::Rejected(_))));
}

#[tokio::test]
async fn test_weather_list_malformed_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/country/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = CountryClient::new(&mock_server.uri()).unwrap();
    let result = client.saved_with_weather(7).await;

    assert!(matches!(result, Err(atlas_api::ApiError::InvalidResponse(_))));
}
