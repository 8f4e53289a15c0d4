use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::constraints::{Constraint, ConstraintClass};
use super::definition::PersonaDefinition;
use super::state::ConversationState;
use crate::generator::TextGenerator;

pub const SINGLE_RESPONSE_FALLBACK: &str =
    "I can’t take over decisions, but I can help you think through options.";
pub const HISTORY_FALLBACK: &str = "I want to make sure you remain in control of your choices.";

/// What a single pass through the loop did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformOutcome {
    /// A gate constraint failed; nothing was committed.
    Fallback {
        class: ConstraintClass,
        constraint_id: String,
        response: String,
    },
    /// The candidate (possibly repaired) was appended to history.
    Committed {
        response: String,
        trajectory_violations: Vec<String>,
        repairs_applied: Vec<String>,
    },
}

impl TransformOutcome {
    pub fn response(&self) -> &str {
        match self {
            Self::Fallback { response, .. } | Self::Committed { response, .. } => response,
        }
    }

    pub fn into_response(self) -> String {
        match self {
            Self::Fallback { response, .. } | Self::Committed { response, .. } => response,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    pub fn was_repaired(&self) -> bool {
        matches!(self, Self::Committed { repairs_applied, .. } if !repairs_applied.is_empty())
    }
}

/// Runs one governed turn and returns the response text.
pub fn transform(
    definition: &PersonaDefinition,
    state: &mut ConversationState,
    generator: &dyn TextGenerator,
    user_input: &str,
) -> String {
    transform_detailed(definition, state, generator, user_input).into_response()
}

/// Runs one governed turn.
///
/// Order is fixed: single-response gates, then history gates (both stop at the
/// first failure and return a fallback without committing), then every
/// trajectory check, then repairs if any trajectory check failed, then commit.
pub fn transform_detailed(
    definition: &PersonaDefinition,
    state: &mut ConversationState,
    generator: &dyn TextGenerator,
    user_input: &str,
) -> TransformOutcome {
    let mut candidate = generator.generate(user_input);
    debug!(
        generator = %generator.name(),
        candidate_len = candidate.len(),
        "persona.candidate"
    );

    for constraint in definition.constraints_of(ConstraintClass::SingleResponse) {
        if let Constraint::SingleResponse(predicate) = constraint
            && !predicate.check(&candidate, state)
        {
            return fallback(state, constraint, SINGLE_RESPONSE_FALLBACK);
        }
    }

    let mut proposed_history = state.history().to_vec();
    proposed_history.push(candidate.clone());
    for constraint in definition.constraints_of(ConstraintClass::History) {
        if let Constraint::History(predicate) = constraint
            && !predicate.check(&proposed_history)
        {
            return fallback(state, constraint, HISTORY_FALLBACK);
        }
    }

    let mut trajectory_violations = Vec::new();
    for constraint in definition.constraints_of(ConstraintClass::Trajectory) {
        if let Constraint::Trajectory(predicate) = constraint
            && !predicate.check(state.history(), &candidate)
        {
            debug!(constraint = %constraint.id(), "persona.trajectory.violation");
            state.record_violation();
            trajectory_violations.push(constraint.id().to_string());
        }
    }

    let mut repairs_applied = Vec::new();
    if !trajectory_violations.is_empty() {
        for repair in definition.repairs() {
            let repaired = repair.apply(&candidate);
            let changed = repaired != candidate;
            debug!(
                repair = %repair.id(),
                changed = changed,
                "persona.repair.applied"
            );
            candidate = repaired;
            state.record_repair();
            repairs_applied.push(repair.id().to_string());
        }
    }

    state.commit(candidate.clone(), definition.commit_category());
    info!(
        category = %definition.commit_category(),
        history_len = state.history().len(),
        trajectory_violations = trajectory_violations.len(),
        repairs = repairs_applied.len(),
        "persona.commit"
    );

    TransformOutcome::Committed {
        response: candidate,
        trajectory_violations,
        repairs_applied,
    }
}

fn fallback(
    state: &mut ConversationState,
    constraint: &Constraint,
    response: &str,
) -> TransformOutcome {
    state.record_violation();
    info!(
        constraint = %constraint.id(),
        class = %constraint.class(),
        constraint_pressure = state.constraint_pressure(),
        "persona.fallback"
    );
    TransformOutcome::Fallback {
        class: constraint.class(),
        constraint_id: constraint.id().to_string(),
        response: response.to_string(),
    }
}
