//! Forecast provider port
//!
//! Defines the interface for retrieving normalized marine forecasts.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Faults a forecast provider can surface
///
/// The two variants are mutually exclusive: `ProviderResponse` is raised only
/// when the provider was reached and answered with an error status;
/// `Communication` covers every other failure, and must never mask a detected
/// provider response error.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Provider answered with a non-success status
    #[error("Provider responded with error: {body} Code: {status}")]
    ProviderResponse {
        /// HTTP status returned by the provider
        status: u16,
        /// Serialized error body as received
        body: String,
    },

    /// Provider could not be reached or the exchange failed
    #[error("Error when trying to communicate with the provider: {0}")]
    Communication(String),
}

/// A normalized forecast record for one timestamp
///
/// Every metric is resolved from a single provider data source; a record is
/// only produced when the timestamp and all seven metrics are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Forecast instant
    pub time: DateTime<FixedOffset>,
    /// Wave height in meters
    pub wave_height: f64,
    /// Wave direction in degrees
    pub wave_direction: f64,
    /// Swell direction in degrees
    pub swell_direction: f64,
    /// Swell height in meters
    pub swell_height: f64,
    /// Swell period in seconds
    pub swell_period: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Wind speed in meters per second
    pub wind_speed: f64,
}

/// Port for marine forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the forecast sequence for a location, in provider order
    async fn fetch_points(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<ForecastPoint>, ForecastError>;

    /// Check if the forecast provider is reachable
    async fn is_available(&self) -> bool;
}
