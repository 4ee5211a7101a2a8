//! Forward geocoding client.
//!
//! Resolves a free-form place string to coordinates via a Nominatim-style
//! `/search?format=json&q=` endpoint. The base URL is configurable so tests
//! can point at a local server.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::GEOCODER_USER_AGENT;
use crate::error_handling::InitializationError;

/// Request timeout for geocoding calls. A hung geocoder would otherwise
/// block the whole resolution pass.
const GEOCODE_TIMEOUT: Duration = Duration::from_secs(10);

/// Error types for geocoding calls.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("geocoding service returned status {0}")]
    Status(reqwest::StatusCode),

    /// The service answered but the coordinates did not parse.
    #[error("geocoding response had malformed coordinates: {0}")]
    Malformed(String),
}

/// Coordinates returned by the geocoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One entry of a Nominatim search response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

/// Forward-geocoding client over a Nominatim-style service.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    /// Builds a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, InitializationError> {
        let http = reqwest::Client::builder()
            .user_agent(GEOCODER_USER_AGENT)
            .timeout(GEOCODE_TIMEOUT)
            .build()?;
        Ok(GeocodeClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Resolves a place string to coordinates.
    ///
    /// Returns `Ok(None)` when the service has no match for the query; the
    /// first hit wins when there are several.
    pub async fn forward(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("format", "json"), ("q", query), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status()));
        }

        let hits: Vec<SearchHit> = response.json().await?;
        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };

        let latitude: f64 = hit
            .lat
            .parse()
            .map_err(|_| GeocodeError::Malformed(hit.lat.clone()))?;
        let longitude: f64 = hit
            .lon
            .parse()
            .map_err(|_| GeocodeError::Malformed(hit.lon.clone()))?;

        Ok(Some(Coordinates {
            latitude,
            longitude,
        }))
    }
}
