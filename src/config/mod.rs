mod env_overrides;
mod loader;
pub mod schema;

pub use env_overrides::{PRESSURE_THRESHOLD_ENV, SATURATION_THRESHOLD_ENV};
pub use schema::{Config, DEFAULT_DEMO_INPUTS, DemoConfig, DriftConfig};
