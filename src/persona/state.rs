use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-session record of committed responses and drift counters.
///
/// Readers are public; every mutator is crate-private so that only the
/// transformation loop can advance the state. Counters never decrease.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    history: Vec<String>,
    memory_counts: BTreeMap<String, u64>,
    constraint_pressure: u64,
    repair_saturation: u64,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn memory_counts(&self) -> &BTreeMap<String, u64> {
        &self.memory_counts
    }

    /// Occurrence count for a memory category; zero when never incremented.
    pub fn memory_count(&self, category: &str) -> u64 {
        self.memory_counts.get(category).copied().unwrap_or(0)
    }

    pub fn constraint_pressure(&self) -> u64 {
        self.constraint_pressure
    }

    pub fn repair_saturation(&self) -> u64 {
        self.repair_saturation
    }

    pub(crate) fn record_violation(&mut self) {
        self.constraint_pressure = self.constraint_pressure.saturating_add(1);
    }

    pub(crate) fn record_repair(&mut self) {
        self.repair_saturation = self.repair_saturation.saturating_add(1);
    }

    pub(crate) fn commit(&mut self, response: String, category: &str) {
        self.history.push(response);
        let count = self.memory_counts.entry(category.to_string()).or_insert(0);
        *count = count.saturating_add(1);
    }
}
