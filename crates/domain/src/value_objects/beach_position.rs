//! Beach orientation value object

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::DomainError;

/// Compass direction a beach faces
///
/// A closed eight-point enumeration. The rating capability combines this
/// orientation with wind and swell directions when scoring a forecast point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeachPosition {
    /// North
    N,
    /// Northeast
    NE,
    /// East
    E,
    /// Southeast
    SE,
    /// South
    S,
    /// Southwest
    SW,
    /// West
    W,
    /// Northwest
    NW,
}

impl BeachPosition {
    /// Get the compass label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for BeachPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BeachPosition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Self::N),
            "NE" => Ok(Self::NE),
            "E" => Ok(Self::E),
            "SE" => Ok(Self::SE),
            "S" => Ok(Self::S),
            "SW" => Ok(Self::SW),
            "W" => Ok(Self::W),
            "NW" => Ok(Self::NW),
            other => Err(DomainError::InvalidPosition(other.to_string())),
        }
    }
}
