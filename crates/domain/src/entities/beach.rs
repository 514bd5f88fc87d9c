//! Beach entity

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{BeachPosition, GeoLocation, UserId};

/// A configured surf break belonging to a user
///
/// Beaches are created by the configuration and storage layers; the
/// forecasting core only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beach {
    location: GeoLocation,
    name: String,
    position: BeachPosition,
    user: UserId,
}

impl Beach {
    /// Create a new beach with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the name is empty
    pub fn new(
        location: GeoLocation,
        name: impl Into<String>,
        position: BeachPosition,
        user: UserId,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "beach name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            location,
            name,
            position,
            user,
        })
    }

    /// Get the geographic location
    #[must_use]
    pub const fn location(&self) -> &GeoLocation {
        &self.location
    }

    /// Get the beach name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the compass orientation
    #[must_use]
    pub const fn position(&self) -> BeachPosition {
        self.position
    }

    /// Get the owning user
    #[must_use]
    pub const fn user(&self) -> &UserId {
        &self.user
    }
}
