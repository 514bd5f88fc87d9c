//! Infrastructure layer - Adapters
//!
//! Implements the application's ports on top of the integration crates.

pub mod adapters;

pub use adapters::StormGlassForecastAdapter;
