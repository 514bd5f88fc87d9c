//! Rating port
//!
//! The rating capability scores a single forecast point for a beach. Its
//! algorithm lives outside this crate; the application only consumes it.

use domain::entities::Beach;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;
use crate::ports::forecast_port::ForecastPoint;

/// Port for the external rating capability
///
/// `rate` is a pure function of the beach orientation/position and the
/// forecast metrics.
#[cfg_attr(test, automock)]
pub trait RatingPort: Send + Sync {
    /// Score one forecast point for a beach
    fn rate(&self, beach: &Beach, point: &ForecastPoint) -> Result<u8, ApplicationError>;
}
