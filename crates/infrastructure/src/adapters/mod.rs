//! Adapters - Port implementations backed by integrations

mod forecast_adapter;

pub use forecast_adapter::StormGlassForecastAdapter;
