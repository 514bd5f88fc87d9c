//! Domain layer for Surfcast
//!
//! Contains the core surf-forecasting types: beaches, geographic
//! coordinates, and compass orientations. This layer has no external
//! service dependencies and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
