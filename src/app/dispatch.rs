use anyhow::{Context, Result};
use tracing::info;

use crate::app::status::render_definition;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::demo::run_reference_demo;
use crate::persona::{classify, reference_definition};

/// Runs one CLI command and returns what should be printed to stdout.
pub fn dispatch(cli: Cli, config: &Config) -> Result<String> {
    let thresholds = config.drift.thresholds();

    match cli.command {
        Commands::Demo { inputs, json } => {
            info!(explicit_inputs = inputs.len(), "demo.start");
            let report =
                run_reference_demo(config, &inputs).context("Failed to run reference demo")?;
            if json {
                report.render_json().context("Failed to serialize demo report")
            } else {
                Ok(report.render_text())
            }
        }
        Commands::Drift {
            pressure,
            saturation,
        } => {
            let status = classify(pressure, saturation, thresholds);
            Ok(format!("{status}: {}\n", status.label()))
        }
        Commands::Definition => {
            let definition =
                reference_definition().context("Failed to build reference persona")?;
            Ok(render_definition(&definition))
        }
    }
}
