use tracing::debug;

use super::types::{DemoReport, TurnReport};
use crate::generator::TextGenerator;
use crate::persona::{
    ConversationState, DriftThresholds, PersonaDefinition, detect_drift, equivalent,
    transform_detailed,
};

/// Drives a fixed list of inputs through one session and records each turn.
pub struct DemoHarness<'a> {
    definition: &'a PersonaDefinition,
    generator: &'a dyn TextGenerator,
    thresholds: DriftThresholds,
}

impl<'a> DemoHarness<'a> {
    pub fn new(
        definition: &'a PersonaDefinition,
        generator: &'a dyn TextGenerator,
        thresholds: DriftThresholds,
    ) -> Self {
        Self {
            definition,
            generator,
            thresholds,
        }
    }

    pub fn run<S: AsRef<str>>(&self, inputs: &[S]) -> DemoReport {
        // Taken before any turn runs so the comparison covers the whole session.
        let snapshot = self.definition.clone();
        let mut state = ConversationState::new();

        let mut turns = Vec::with_capacity(inputs.len());
        for (index, input) in inputs.iter().enumerate() {
            let input = input.as_ref();
            let outcome = transform_detailed(self.definition, &mut state, self.generator, input);
            let drift = detect_drift(&state, self.thresholds);
            debug!(turn = index + 1, drift = %drift, "demo.turn");
            turns.push(TurnReport {
                turn: index + 1,
                input: input.to_string(),
                outcome,
                drift,
                constraint_pressure: state.constraint_pressure(),
                repair_saturation: state.repair_saturation(),
                history_len: state.history().len(),
            });
        }

        DemoReport {
            turns,
            identity_preserved: equivalent(self.definition, &snapshot),
            final_state: state,
        }
    }
}
