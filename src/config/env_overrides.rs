use super::Config;
use crate::error::ConfigError;

pub const PRESSURE_THRESHOLD_ENV: &str = "PERSONA_GOVERNOR_PRESSURE_THRESHOLD";
pub const SATURATION_THRESHOLD_ENV: &str = "PERSONA_GOVERNOR_SATURATION_THRESHOLD";

impl Config {
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn apply_overrides_from(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(raw) = lookup(PRESSURE_THRESHOLD_ENV)
            && !raw.trim().is_empty()
        {
            self.drift.constraint_pressure_threshold =
                parse_threshold(PRESSURE_THRESHOLD_ENV, &raw)?;
        }

        if let Some(raw) = lookup(SATURATION_THRESHOLD_ENV)
            && !raw.trim().is_empty()
        {
            self.drift.repair_saturation_threshold =
                parse_threshold(SATURATION_THRESHOLD_ENV, &raw)?;
        }

        Ok(())
    }
}

fn parse_threshold(key: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .map(u64::from)
        .map_err(|_| {
            ConfigError::Validation(format!(
                "{key} must be a non-negative integer, got {raw:?}"
            ))
        })
}
