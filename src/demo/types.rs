use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::persona::{ConversationState, DriftStatus, TransformOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub turn: usize,
    pub input: String,
    pub outcome: TransformOutcome,
    pub drift: DriftStatus,
    pub constraint_pressure: u64,
    pub repair_saturation: u64,
    pub history_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoReport {
    pub turns: Vec<TurnReport>,
    pub identity_preserved: bool,
    pub final_state: ConversationState,
}

impl DemoReport {
    pub fn final_drift(&self) -> Option<DriftStatus> {
        self.turns.last().map(|turn| turn.drift)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::from("\n=== Persona Engineering Demo ===\n");
        for turn in &self.turns {
            let _ = writeln!(out, "\nUSER {}: {}", turn.turn, turn.input);
            let _ = writeln!(out, "ASSISTANT: {}", turn.outcome.response());
            let _ = writeln!(out, "DRIFT STATUS: {}", turn.drift.label());
        }
        let _ = writeln!(
            out,
            "\nPersona identity preserved: {}",
            self.identity_preserved
        );
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
