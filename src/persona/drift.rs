use serde::{Deserialize, Serialize};
use strum::Display;

use super::state::ConversationState;

pub const DEFAULT_CONSTRAINT_PRESSURE_THRESHOLD: u64 = 3;
pub const DEFAULT_REPAIR_SATURATION_THRESHOLD: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DriftStatus {
    Stable,
    HighConstraintPressure,
    HighRepairSaturation,
}

impl DriftStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Stable => "Persona Stable",
            Self::HighConstraintPressure => "Drift Risk: High Axiom Pressure",
            Self::HighRepairSaturation => "Drift Risk: Primitive Saturation",
        }
    }

    pub fn is_stable(self) -> bool {
        self == Self::Stable
    }
}

/// Limits above which cumulative counters are reported as drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftThresholds {
    pub constraint_pressure: u64,
    pub repair_saturation: u64,
}

impl Default for DriftThresholds {
    fn default() -> Self {
        Self {
            constraint_pressure: DEFAULT_CONSTRAINT_PRESSURE_THRESHOLD,
            repair_saturation: DEFAULT_REPAIR_SATURATION_THRESHOLD,
        }
    }
}

/// Classifies accumulated pressure and saturation.
///
/// Both comparisons are strict, so a counter equal to its threshold is still
/// stable. Pressure is checked first and wins when both are exceeded.
pub fn detect_drift(state: &ConversationState, thresholds: DriftThresholds) -> DriftStatus {
    classify(
        state.constraint_pressure(),
        state.repair_saturation(),
        thresholds,
    )
}

/// [`detect_drift`] over raw counter values.
pub fn classify(
    constraint_pressure: u64,
    repair_saturation: u64,
    thresholds: DriftThresholds,
) -> DriftStatus {
    if constraint_pressure > thresholds.constraint_pressure {
        return DriftStatus::HighConstraintPressure;
    }
    if repair_saturation > thresholds.repair_saturation {
        return DriftStatus::HighRepairSaturation;
    }
    DriftStatus::Stable
}
