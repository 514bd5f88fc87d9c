//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::ports::ForecastError;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Forecast provider fault, preserving the response/communication split
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    /// Rating capability failed
    #[error("Rating failed: {0}")]
    Rating(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error originated from the provider rejecting a request
    pub fn is_provider_fault(&self) -> bool {
        matches!(
            self,
            ApplicationError::Forecast(ForecastError::ProviderResponse { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_faults_stay_matchable() {
        let err = ApplicationError::from(ForecastError::ProviderResponse {
            status: 429,
            body: "{\"errors\":[\"Too Many Requests\"]}".to_string(),
        });
        assert!(err.is_provider_fault());
        assert!(err.to_string().contains("429"));
    }

    #[test]
    fn communication_fault_is_not_provider_fault() {
        let err = ApplicationError::from(ForecastError::Communication("Network Error".to_string()));
        assert!(!err.is_provider_fault());
    }

    #[test]
    fn rating_error_message() {
        let err = ApplicationError::Rating("position unavailable".to_string());
        assert_eq!(err.to_string(), "Rating failed: position unavailable");
    }
}
