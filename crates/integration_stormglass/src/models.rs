//! StormGlass data models
//!
//! Types for the StormGlass point weather wire format and the normalized
//! records produced from it.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Per-metric map from data-source name to the value that source reports
pub type SourceValues = HashMap<String, f64>;

/// Raw response envelope returned by `/weather/point`
#[derive(Debug, Clone, Deserialize)]
pub struct StormGlassResponse {
    /// Hourly entries in provider order
    pub hours: Vec<RawStormGlassPoint>,
}

/// One raw hourly entry: a timestamp plus per-source values for each metric
///
/// Any field can be missing in the provider payload; the validity predicate
/// is applied during normalization, never at parse time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStormGlassPoint {
    pub time: Option<String>,
    pub wave_height: SourceValues,
    pub wave_direction: SourceValues,
    pub swell_direction: SourceValues,
    pub swell_height: SourceValues,
    pub swell_period: SourceValues,
    pub wind_direction: SourceValues,
    pub wind_speed: SourceValues,
}

impl RawStormGlassPoint {
    /// Normalize this entry against one data source
    ///
    /// Returns `None` unless the timestamp is present and parseable and
    /// every metric carries a value for `source`; a partially usable entry
    /// is never produced.
    pub fn normalize(&self, source: &str) -> Option<ForecastPoint> {
        let time = self.time.as_deref().filter(|t| !t.is_empty())?;
        let time = DateTime::parse_from_rfc3339(time).ok()?;

        Some(ForecastPoint {
            time,
            wave_height: *self.wave_height.get(source)?,
            wave_direction: *self.wave_direction.get(source)?,
            swell_direction: *self.swell_direction.get(source)?,
            swell_height: *self.swell_height.get(source)?,
            swell_period: *self.swell_period.get(source)?,
            wind_direction: *self.wind_direction.get(source)?,
            wind_speed: *self.wind_speed.get(source)?,
        })
    }
}

/// A normalized forecast record for one timestamp, all metrics resolved
/// from the same data source
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
