//! Google Maps client: geocoding and Places Nearby Search.
//!
//! Handlers depend on the `PlacesLookup` trait so the enrichment stage can be
//! exercised without the network.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum MapsError {
    /// Carries no request URL: the API key travels in the query string.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Maps API returned {status}: {message}")]
    Status { status: String, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for MapsError {
    fn from(e: reqwest::Error) -> Self {
        MapsError::Http(e.without_url())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A single place as returned by the nearby search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    pub name: String,
    pub place_id: String,
    pub vicinity: Option<String>,
    pub formatted_address: Option<String>,
}

#[async_trait]
pub trait PlacesLookup: Send + Sync {
    /// Resolves a free-form address. `Ok(None)` means the address matched nothing.
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, MapsError>;

    /// Places around `location` matching `keyword`, in upstream order.
    async fn nearby(
        &self,
        location: Coordinates,
        keyword: &str,
        radius_m: u32,
    ) -> Result<Vec<Place>, MapsError>;
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinates,
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    status: String,
    #[serde(default)]
    results: Vec<Place>,
    error_message: Option<String>,
}

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

fn check_status(status: String, error_message: Option<String>) -> Result<(), MapsError> {
    if status == STATUS_OK || status == STATUS_ZERO_RESULTS {
        Ok(())
    } else {
        Err(MapsError::Status {
            status,
            message: error_message.unwrap_or_default(),
        })
    }
}

#[derive(Clone)]
pub struct GoogleMapsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleMapsClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, MapsError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, MapsError> {
        let body = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .query(&[("key", &self.api_key)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PlacesLookup for GoogleMapsClient {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, MapsError> {
        let response: GeocodeResponse = self
            .get_json("/maps/api/geocode/json", &[("address", address.to_string())])
            .await?;
        check_status(response.status, response.error_message)?;

        let location = response.results.first().map(|r| r.geometry.location);
        debug!("Geocoded '{address}' to {location:?}");
        Ok(location)
    }

    async fn nearby(
        &self,
        location: Coordinates,
        keyword: &str,
        radius_m: u32,
    ) -> Result<Vec<Place>, MapsError> {
        let response: NearbyResponse = self
            .get_json(
                "/maps/api/place/nearbysearch/json",
                &[
                    ("location", format!("{},{}", location.lat, location.lng)),
                    ("radius", radius_m.to_string()),
                    ("keyword", keyword.to_string()),
                ],
            )
            .await?;
        check_status(response.status, response.error_message)?;

        debug!(
            "Nearby search for '{keyword}' returned {} places",
            response.results.len()
        );
        Ok(response.results)
    }
}
