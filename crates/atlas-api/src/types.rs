//! Wire types for the country backend.

use serde::{Deserialize, Serialize};

/// A country candidate returned by the search endpoint.
///
/// The search endpoint abbreviates the coordinate field names; the create
/// endpoint spells them out (see [`CreateCountryRequest`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "long")]
    pub longitude: f64,
}

/// Request body for `POST /country/create`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCountryRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Country> for CreateCountryRequest {
    fn from(country: &Country) -> Self {
        Self {
            name: country.name.clone(),
            latitude: country.latitude,
            longitude: country.longitude,
        }
    }
}

/// A saved country enriched with the server-computed weather reading.
/// The client never computes weather itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCountry {
    pub name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    /// Degrees Celsius
    pub temperature: f64,
    pub description: String,
}

impl SavedCountry {
    /// Title-cased description for display ("light rain" -> "Light Rain").
    pub fn display_description(&self) -> String {
        self.description
            .to_lowercase()
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Envelope returned by `GET /country/weather`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<SavedCountry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_deserializes_abbreviated_coordinates() {
        let country: Country =
            serde_json::from_str(r#"{"name":"France","lat":46.2,"long":2.2}"#).unwrap();

        assert_eq!(country.name, "France");
        assert_eq!(country.latitude, 46.2);
        assert_eq!(country.longitude, 2.2);
    }

    #[test]
    fn test_create_request_spells_out_coordinates() {
        let country = Country {
            name: "France".to_string(),
            latitude: 46.2,
            longitude: 2.2,
        };

        let json = serde_json::to_value(CreateCountryRequest::from(&country)).unwrap();
        assert_eq!(json["name"], "France");
        assert_eq!(json["latitude"], 46.2);
        assert_eq!(json["longitude"], 2.2);
    }

    #[test]
    fn test_saved_country_tolerates_missing_coordinates() {
        let saved: SavedCountry = serde_json::from_str(
            r#"{"name":"France","temperature":18.5,"description":"light rain"}"#,
        )
        .unwrap();

        assert_eq!(saved.name, "France");
        assert_eq!(saved.temperature, 18.5);
        assert_eq!(saved.latitude, 0.0);
    }

    #[test]
    fn test_display_description_title_cases() {
        let saved = SavedCountry {
            name: "France".to_string(),
            latitude: 46.2,
            longitude: 2.2,
            temperature: 18.5,
            description: "SCATTERED clouds".to_string(),
        };

        assert_eq!(saved.display_description(), "Scattered Clouds");
    }

    #[test]
    fn test_weather_envelope_defaults_data() {
        let response: WeatherListResponse =
            serde_json::from_str(r#"{"success":false}"#).unwrap();

        assert!(!response.success);
        assert!(response.data.is_empty());
    }
}
