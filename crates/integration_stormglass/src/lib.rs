//! StormGlass marine weather integration
//!
//! Client for the StormGlass point weather API (<https://stormglass.io>).
//! Fetches raw multi-source marine metrics and normalizes them into
//! per-timestamp forecast points resolved from a single data source.

pub mod client;
mod models;

pub use client::{MarineForecastClient, StormGlassClient, StormGlassConfig, StormGlassError};
pub use models::{ForecastPoint, RawStormGlassPoint, StormGlassResponse};
