use crate::models::GeocodeResult;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when querying the OpenCage geocoding API
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),
}

/// The subset of the OpenCage response envelope we read
#[derive(Debug, Deserialize)]
struct GeocodeEnvelope {
    #[serde(default)]
    results: Vec<GeocodeHit>,
}

#[derive(Debug, Deserialize)]
struct GeocodeHit {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

/// OpenCage forward-geocoding client
///
/// Translates a postal code into coordinates, restricted to a single country.
pub struct GeocodeClient {
    base_url: String,
    api_key: String,
    country_code: String,
    client: Client,
}

impl GeocodeClient {
    /// Create a new geocoding client
    pub fn new(base_url: String, api_key: String, country_code: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            country_code,
            client,
        }
    }

    /// Resolve a postal code to coordinates
    ///
    /// Returns `Ok(None)` when the code matches nothing, so callers can
    /// distinguish an unknown code from an upstream failure.
    pub async fn resolve_postal_code(
        &self,
        postal_code: &str,
    ) -> Result<Option<GeocodeResult>, GeocodeError> {
        let url = format!("{}/geocode/v1/json", self.base_url.trim_end_matches('/'));

        tracing::debug!("Geocoding postal code: {}", postal_code);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", postal_code),
                ("key", &self.api_key),
                ("countrycode", &self.country_code),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Geocode lookup failed: {} - {}", status, body);
            return Err(GeocodeError::ApiError(format!(
                "Geocode lookup failed: {}",
                status
            )));
        }

        let envelope: GeocodeEnvelope = response.json().await?;

        Ok(envelope.results.first().map(|hit| GeocodeResult {
            latitude: hit.geometry.lat,
            longitude: hit.geometry.lng,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_client_creation() {
        let client = GeocodeClient::new(
            "https://api.opencagedata.com".to_string(),
            "test_key".to_string(),
            "us".to_string(),
        );

        assert_eq!(client.base_url, "https://api.opencagedata.com");
        assert_eq!(client.country_code, "us");
    }

    #[test]
    fn test_envelope_parsing_reads_first_geometry() {
        let json = r#"{
            "results": [
                {"geometry": {"lat": 37.77, "lng": -122.41}},
                {"geometry": {"lat": 1.0, "lng": 2.0}}
            ]
        }"#;
        let envelope: GeocodeEnvelope = serde_json::from_str(json).unwrap();
        let first = envelope.results.first().unwrap();
        assert_eq!(first.geometry.lat, 37.77);
        assert_eq!(first.geometry.lng, -122.41);
    }

    #[test]
    fn test_envelope_parsing_tolerates_no_results() {
        let envelope: GeocodeEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.results.is_empty());
    }
}
