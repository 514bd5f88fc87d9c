//! Forecast adapter - Implements ForecastPort using integration_stormglass

use application::ports::{ForecastError, ForecastPoint, ForecastPort};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_stormglass::{
    ForecastPoint as StormGlassPoint, MarineForecastClient, StormGlassClient, StormGlassConfig,
    StormGlassError,
};
use tracing::{debug, instrument};

/// Adapter for marine forecasts using the StormGlass API
pub struct StormGlassForecastAdapter {
    client: Box<dyn MarineForecastClient>,
}

impl std::fmt::Debug for StormGlassForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StormGlassForecastAdapter")
            .finish_non_exhaustive()
    }
}

impl StormGlassForecastAdapter {
    /// Create a new adapter from a StormGlass configuration
    ///
    /// # Errors
    ///
    /// Returns a communication fault if the HTTP client fails to initialize.
    pub fn new(config: StormGlassConfig) -> Result<Self, ForecastError> {
        let client = StormGlassClient::new(config).map_err(Self::map_error)?;
        Ok(Self {
            client: Box::new(client),
        })
    }

    /// Create an adapter over an existing marine forecast client
    pub fn from_client(client: Box<dyn MarineForecastClient>) -> Self {
        Self { client }
    }

    /// Map integration errors to port faults, variant by variant
    ///
    /// The response/communication distinction is preserved so callers can
    /// still tell "provider rejected the request" from "could not reach
    /// provider".
    fn map_error(err: StormGlassError) -> ForecastError {
        match err {
            StormGlassError::ProviderResponse { status, body } => {
                ForecastError::ProviderResponse { status, body }
            }
            StormGlassError::Communication(message) => ForecastError::Communication(message),
        }
    }

    /// Convert an integration forecast point to the port representation
    fn map_point(point: &StormGlassPoint) -> ForecastPoint {
        ForecastPoint {
            time: point.time,
            wave_height: point.wave_height,
            wave_direction: point.wave_direction,
            swell_direction: point.swell_direction,
            swell_height: point.swell_height,
            swell_period: point.swell_period,
            wind_direction: point.wind_direction,
            wind_speed: point.wind_speed,
        }
    }
}

#[async_trait]
impl ForecastPort for StormGlassForecastAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lng = location.longitude()))]
    async fn fetch_points(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<ForecastPoint>, ForecastError> {
        let points = self
            .client
            .fetch_points(location)
            .await
            .map_err(Self::map_error)?;

        debug!(points = points.len(), "Retrieved StormGlass forecast");

        Ok(points.iter().map(Self::map_point).collect())
    }

    async fn is_available(&self) -> bool {
        self.client.is_available().await
    }
}
