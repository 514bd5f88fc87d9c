//! Forecast service
//!
//! Fetches forecasts for a list of beaches, rates every point, and regroups
//! the per-beach time series into one chronological sequence.

use std::{collections::BTreeMap, fmt, sync::Arc};

use chrono::{DateTime, FixedOffset};
use domain::entities::Beach;
use domain::value_objects::BeachPosition;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{ForecastPoint, ForecastPort, RatingPort},
};

/// A forecast point annotated with the identity of its beach and the rating
/// the external capability assigned to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedForecastPoint {
    /// Beach latitude
    pub lat: f64,
    /// Beach longitude
    pub lng: f64,
    /// Beach name
    pub name: String,
    /// Compass orientation of the beach
    pub position: BeachPosition,
    /// Rating assigned by the rating capability
    pub rating: u8,
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

impl RatedForecastPoint {
    fn from_parts(beach: &Beach, point: &ForecastPoint, rating: u8) -> Self {
        Self {
            lat: beach.location().latitude(),
            lng: beach.location().longitude(),
            name: beach.name().to_string(),
            position: beach.position(),
            rating,
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

/// All rated points sharing one timestamp, beaches in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGroup {
    /// The shared forecast instant
    pub time: DateTime<FixedOffset>,
    /// Rated points for that instant, one per reporting beach point
    pub forecast: Vec<RatedForecastPoint>,
}

/// Forecast aggregation service
pub struct ForecastService {
    forecast_port: Arc<dyn ForecastPort>,
    rating_port: Arc<dyn RatingPort>,
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService").finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a new forecast service
    pub fn new(forecast_port: Arc<dyn ForecastPort>, rating_port: Arc<dyn RatingPort>) -> Self {
        Self {
            forecast_port,
            rating_port,
        }
    }

    /// Fetch, rate, and regroup forecasts for every beach
    ///
    /// Beaches are processed strictly in input order, one outstanding fetch
    /// at a time. The first fetch or rating failure aborts the whole
    /// aggregation; no partial result is ever returned.
    #[instrument(skip(self, beaches), fields(beaches = beaches.len()))]
    pub async fn process_forecasts(
        &self,
        beaches: &[Beach],
    ) -> Result<Vec<TimeGroup>, ApplicationError> {
        info!(count = beaches.len(), "Processing beach forecasts");

        // Ordered by instant; bucket insertion order preserves beach order.
        let mut groups: BTreeMap<DateTime<FixedOffset>, Vec<RatedForecastPoint>> = BTreeMap::new();

        for beach in beaches {
            let points = self.forecast_port.fetch_points(beach.location()).await?;
            debug!(beach = beach.name(), points = points.len(), "Fetched forecast points");

            for point in points {
                let rating = self.rating_port.rate(beach, &point)?;
                groups
                    .entry(point.time)
                    .or_default()
                    .push(RatedForecastPoint::from_parts(beach, &point, rating));
            }
        }

        Ok(groups
            .into_iter()
            .map(|(time, forecast)| TimeGroup { time, forecast })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use domain::value_objects::{BeachPosition, GeoLocation, UserId};
    use serde_json::json;

    use super::*;
    use crate::ports::{ForecastError, MockForecastPort, MockRatingPort};

    fn manly() -> Beach {
        Beach::new(
            GeoLocation::manly(),
            "Manly",
            BeachPosition::E,
            UserId::new("some-id").unwrap(),
        )
        .unwrap()
    }

    fn bondi() -> Beach {
        Beach::new(
            GeoLocation::bondi(),
            "Bondi",
            BeachPosition::S,
            UserId::new("some-id").unwrap(),
        )
        .unwrap()
    }

    fn point(time: &str, swell_direction: f64) -> ForecastPoint {
        ForecastPoint {
            time: DateTime::parse_from_rfc3339(time).unwrap(),
            wave_height: 0.47,
            wave_direction: 231.38,
            swell_direction,
            swell_height: 0.15,
            swell_period: 3.89,
            wind_direction: 299.45,
            wind_speed: 100.0,
        }
    }

    fn three_hour_fixture() -> Vec<ForecastPoint> {
        vec![
            ForecastPoint {
                time: DateTime::parse_from_rfc3339("2020-04-26T00:00:00+00:00").unwrap(),
                wave_height: 0.47,
                wave_direction: 231.38,
                swell_direction: 64.26,
                swell_height: 0.15,
                swell_period: 3.89,
                wind_direction: 299.45,
                wind_speed: 100.0,
            },
            ForecastPoint {
                time: DateTime::parse_from_rfc3339("2020-04-26T01:00:00+00:00").unwrap(),
                wave_height: 0.46,
                wave_direction: 232.12,
                swell_direction: 123.41,
                swell_height: 0.21,
                swell_period: 3.67,
                wind_direction: 310.48,
                wind_speed: 100.0,
            },
            ForecastPoint {
                time: DateTime::parse_from_rfc3339("2020-04-26T02:00:00+00:00").unwrap(),
                wave_height: 0.46,
                wave_direction: 232.86,
                swell_direction: 182.56,
                swell_height: 0.28,
                swell_period: 3.44,
                wind_direction: 321.5,
                wind_speed: 100.0,
            },
        ]
    }

    fn service(forecast_port: MockForecastPort, rating_port: MockRatingPort) -> ForecastService {
        ForecastService::new(Arc::new(forecast_port), Arc::new(rating_port))
    }

    #[tokio::test]
    async fn returns_rated_time_groups_for_a_list_of_beaches() {
        let mut forecast_port = MockForecastPort::new();
        forecast_port
            .expect_fetch_points()
            .times(1)
            .returning(|_| Ok(three_hour_fixture()));

        let mut rating_port = MockRatingPort::new();
        rating_port.expect_rate().returning(|_, _| Ok(1));

        let groups = service(forecast_port, rating_port)
            .process_forecasts(&[manly()])
            .await
            .unwrap();

        let expected = json!([
            {
                "time": "2020-04-26T00:00:00+00:00",
                "forecast": [
                    {
                        "lat": -33.792726,
                        "lng": 151.289824,
                        "name": "Manly",
                        "position": "E",
                        "rating": 1,
                        "time": "2020-04-26T00:00:00+00:00",
                        "swellDirection": 64.26,
                        "swellHeight": 0.15,
                        "swellPeriod": 3.89,
                        "waveDirection": 231.38,
                        "waveHeight": 0.47,
                        "windDirection": 299.45,
                        "windSpeed": 100.0
                    }
                ]
            },
            {
                "time": "2020-04-26T01:00:00+00:00",
                "forecast": [
                    {
                        "lat": -33.792726,
                        "lng": 151.289824,
                        "name": "Manly",
                        "position": "E",
                        "rating": 1,
                        "time": "2020-04-26T01:00:00+00:00",
                        "swellDirection": 123.41,
                        "swellHeight": 0.21,
                        "swellPeriod": 3.67,
                        "waveDirection": 232.12,
                        "waveHeight": 0.46,
                        "windDirection": 310.48,
                        "windSpeed": 100.0
                    }
                ]
            },
            {
                "time": "2020-04-26T02:00:00+00:00",
                "forecast": [
                    {
                        "lat": -33.792726,
                        "lng": 151.289824,
                        "name": "Manly",
                        "position": "E",
                        "rating": 1,
                        "time": "2020-04-26T02:00:00+00:00",
                        "swellDirection": 182.56,
                        "swellHeight": 0.28,
                        "swellPeriod": 3.44,
                        "waveDirection": 232.86,
                        "waveHeight": 0.46,
                        "windDirection": 321.5,
                        "windSpeed": 100.0
                    }
                ]
            }
        ]);

        assert_eq!(serde_json::to_value(&groups).unwrap(), expected);
    }

    #[tokio::test]
    async fn groups_are_chronological_even_when_provider_order_is_not() {
        let mut forecast_port = MockForecastPort::new();
        forecast_port.expect_fetch_points().times(1).returning(|_| {
            Ok(vec![
                point("2020-04-26T02:00:00+00:00", 182.56),
                point("2020-04-26T00:00:00+00:00", 64.26),
                point("2020-04-26T01:00:00+00:00", 123.41),
            ])
        });

        let mut rating_port = MockRatingPort::new();
        rating_port.expect_rate().returning(|_, _| Ok(1));

        let groups = service(forecast_port, rating_port)
            .process_forecasts(&[manly()])
            .await
            .unwrap();

        let times: Vec<String> = groups.iter().map(|g| g.time.to_rfc3339()).collect();
        assert_eq!(
            times,
            vec![
                "2020-04-26T00:00:00+00:00",
                "2020-04-26T01:00:00+00:00",
                "2020-04-26T02:00:00+00:00",
            ]
        );
    }

    #[tokio::test]
    async fn merges_beaches_reporting_the_same_timestamp_in_input_order() {
        let mut forecast_port = MockForecastPort::new();
        forecast_port
            .expect_fetch_points()
            .times(2)
            .returning(|_| Ok(vec![point("2020-04-26T00:00:00+00:00", 64.26)]));

        let mut rating_port = MockRatingPort::new();
        rating_port
            .expect_rate()
            .returning(|beach, _| Ok(if beach.name() == "Manly" { 3 } else { 2 }));

        let groups = service(forecast_port, rating_port)
            .process_forecasts(&[manly(), bondi()])
            .await
            .unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].forecast.len(), 2);
        assert_eq!(groups[0].forecast[0].name, "Manly");
        assert_eq!(groups[0].forecast[0].rating, 3);
        assert_eq!(groups[0].forecast[1].name, "Bondi");
        assert_eq!(groups[0].forecast[1].rating, 2);
    }

    #[tokio::test]
    async fn first_fetch_failure_aborts_the_whole_aggregation() {
        let mut forecast_port = MockForecastPort::new();
        // The second beach would succeed, but must never be fetched.
        forecast_port
            .expect_fetch_points()
            .times(1)
            .returning(|_| Err(ForecastError::Communication("Network Error".to_string())));

        let rating_port = MockRatingPort::new();

        let result = service(forecast_port, rating_port)
            .process_forecasts(&[manly(), bondi()])
            .await;

        match result {
            Err(ApplicationError::Forecast(ForecastError::Communication(msg))) => {
                assert_eq!(msg, "Network Error");
            }
            other => panic!("expected communication fault, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn provider_response_fault_is_propagated_unchanged() {
        let mut forecast_port = MockForecastPort::new();
        forecast_port.expect_fetch_points().times(1).returning(|_| {
            Err(ForecastError::ProviderResponse {
                status: 429,
                body: "{\"errors\":[\"Too Many Requests\"]}".to_string(),
            })
        });

        let rating_port = MockRatingPort::new();

        let result = service(forecast_port, rating_port)
            .process_forecasts(&[manly()])
            .await;

        match result {
            Err(ApplicationError::Forecast(ForecastError::ProviderResponse { status, body })) => {
                assert_eq!(status, 429);
                assert!(body.contains("Too Many Requests"));
            }
            other => panic!("expected provider response fault, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rating_failure_aborts_the_whole_aggregation() {
        let mut forecast_port = MockForecastPort::new();
        forecast_port
            .expect_fetch_points()
            .times(1)
            .returning(|_| Ok(three_hour_fixture()));

        let mut rating_port = MockRatingPort::new();
        rating_port
            .expect_rate()
            .returning(|_, _| Err(ApplicationError::Rating("position unavailable".to_string())));

        let result = service(forecast_port, rating_port)
            .process_forecasts(&[manly()])
            .await;

        assert!(matches!(result, Err(ApplicationError::Rating(_))));
    }

    #[tokio::test]
    async fn no_beaches_yields_no_groups() {
        let forecast_port = MockForecastPort::new();
        let rating_port = MockRatingPort::new();

        let groups = service(forecast_port, rating_port)
            .process_forecasts(&[])
            .await
            .unwrap();

        assert!(groups.is_empty());
    }

    #[test]
    fn debug_impl_does_not_expose_ports() {
        let service = service(MockForecastPort::new(), MockRatingPort::new());
        assert!(format!("{service:?}").contains("ForecastService"));
    }
}
