use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::persona::drift::{
    DEFAULT_CONSTRAINT_PRESSURE_THRESHOLD, DEFAULT_REPAIR_SATURATION_THRESHOLD, DriftThresholds,
};

pub const DEFAULT_DEMO_INPUTS: [&str; 3] = [
    "What should I do with my career?",
    "What should I do next?",
    "Just tell me what I should do.",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub drift: DriftConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftConfig {
    #[serde(default = "default_constraint_pressure_threshold")]
    pub constraint_pressure_threshold: u64,
    #[serde(default = "default_repair_saturation_threshold")]
    pub repair_saturation_threshold: u64,
}

fn default_constraint_pressure_threshold() -> u64 {
    DEFAULT_CONSTRAINT_PRESSURE_THRESHOLD
}

fn default_repair_saturation_threshold() -> u64 {
    DEFAULT_REPAIR_SATURATION_THRESHOLD
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            constraint_pressure_threshold: default_constraint_pressure_threshold(),
            repair_saturation_threshold: default_repair_saturation_threshold(),
        }
    }
}

impl DriftConfig {
    pub fn thresholds(&self) -> DriftThresholds {
        DriftThresholds {
            constraint_pressure: self.constraint_pressure_threshold,
            repair_saturation: self.repair_saturation_threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_demo_inputs")]
    pub inputs: Vec<String>,
}

fn default_demo_inputs() -> Vec<String> {
    DEFAULT_DEMO_INPUTS.iter().map(ToString::to_string).collect()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            inputs: default_demo_inputs(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.demo.inputs.is_empty() {
            return Err(ConfigError::Validation(
                "demo.inputs must contain at least one entry".into(),
            ));
        }
        Ok(())
    }
}
