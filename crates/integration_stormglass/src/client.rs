//! StormGlass weather client
//!
//! HTTP client for the StormGlass point weather API.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ForecastPoint, StormGlassResponse};

/// Metrics requested from the provider, fixed for every call
const STORMGLASS_API_PARAMS: &str =
    "waveHeight,windSpeed,windDirection,swellDirection,swellHeight,swellPeriod,waveDirection";

/// Data source whose values are treated as authoritative
const STORMGLASS_API_SOURCE: &str = "noaa";

/// StormGlass client errors
///
/// The two variants are mutually exclusive. `ProviderResponse` is raised
/// only when the provider was reached and answered with an error status;
/// `Communication` covers every other failure and never masks a detected
/// provider response error.
#[derive(Debug, Error)]
pub enum StormGlassError {
    /// Provider answered with a non-success status
    #[error("Unexpected error returned by the StormGlass service: {body} Code: {status}")]
    ProviderResponse {
        /// HTTP status returned by the provider
        status: u16,
        /// Error body as received
        body: String,
    },

    /// Provider could not be reached or the exchange failed
    #[error("Unexpected error when trying to communicate to StormGlass: {0}")]
    Communication(String),
}

/// StormGlass service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StormGlassConfig {
    /// StormGlass API base URL (default: <https://api.stormglass.io/v2>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent in the `Authorization` header
    pub api_key: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.stormglass.io/v2".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl StormGlassConfig {
    /// Create a configuration for the public API with the given key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for fetching marine forecasts
#[async_trait]
pub trait MarineForecastClient: Send + Sync {
    /// Fetch normalized forecast points for a location, in provider order
    async fn fetch_points(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<ForecastPoint>, StormGlassError>;

    /// Check if the provider is reachable and accepting requests
    async fn is_available(&self) -> bool;
}

/// StormGlass HTTP client implementation
#[derive(Debug)]
pub struct StormGlassClient {
    client: Client,
    config: StormGlassConfig,
}

impl StormGlassClient {
    /// Create a new StormGlass client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: StormGlassConfig) -> Result<Self, StormGlassError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StormGlassError::Communication(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the point weather URL for a location
    fn build_point_url(&self, location: &GeoLocation) -> String {
        format!(
            "{}/weather/point?lat={}&lng={}&params={}&source={}",
            self.config.base_url,
            location.latitude(),
            location.longitude(),
            STORMGLASS_API_PARAMS,
            STORMGLASS_API_SOURCE
        )
    }

    /// Project raw hourly entries onto one data source
    ///
    /// Entries failing the validity predicate are dropped silently; partial
    /// provider data is a quality filter, not an error. Provider order is
    /// preserved.
    fn normalize_points(response: &StormGlassResponse, source: &str) -> Vec<ForecastPoint> {
        response
            .hours
            .iter()
            .filter_map(|hour| hour.normalize(source))
            .collect()
    }
}

#[async_trait]
impl MarineForecastClient for StormGlassClient {
    #[instrument(skip(self), fields(lat = location.latitude(), lng = location.longitude()))]
    async fn fetch_points(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<ForecastPoint>, StormGlassError> {
        let url = self.build_point_url(location);
        debug!(url = %url, "Fetching StormGlass point forecast");

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.config.api_key)
            .send()
            .await
            .map_err(|e| StormGlassError::Communication(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StormGlassError::ProviderResponse {
                status: status.as_u16(),
                body,
            });
        }

        let raw: StormGlassResponse = response
            .json()
            .await
            .map_err(|e| StormGlassError::Communication(e.to_string()))?;

        let points = Self::normalize_points(&raw, STORMGLASS_API_SOURCE);
        debug!(
            raw = raw.hours.len(),
            kept = points.len(),
            "Normalized StormGlass response"
        );

        Ok(points)
    }

    async fn is_available(&self) -> bool {
        match self.fetch_points(&GeoLocation::manly()).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "StormGlass availability check failed");
                false
            }
        }
    }
}
