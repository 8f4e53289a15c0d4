pub mod harness;
pub mod types;

pub use harness::DemoHarness;
pub use types::{DemoReport, TurnReport};

use crate::config::Config;
use crate::error::Result;
use crate::generator::NaiveGenerator;
use crate::persona::reference_definition;

/// Runs the reference persona against the naive generator with the configured
/// thresholds. Empty `inputs` falls back to the configured demo inputs.
pub fn run_reference_demo(config: &Config, inputs: &[String]) -> Result<DemoReport> {
    let definition = reference_definition()?;
    let inputs = if inputs.is_empty() {
        config.demo.inputs.as_slice()
    } else {
        inputs
    };
    let harness = DemoHarness::new(&definition, &NaiveGenerator, config.drift.thresholds());
    Ok(harness.run(inputs))
}
