use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::Display;

use super::state::ConversationState;

/// Which inputs a constraint is evaluated against, and how a failure is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ConstraintClass {
    /// Gate on the candidate alone. Failure short-circuits with a fallback.
    SingleResponse,
    /// Gate on the proposed history. Failure short-circuits with a fallback.
    History,
    /// Checked on the transition from history to candidate. Failures trigger repair.
    Trajectory,
}

/// Predicate over a single candidate response.
pub trait SingleResponseConstraint: Send + Sync {
    fn id(&self) -> &str;

    /// Returns `true` when the candidate satisfies the constraint.
    fn check(&self, candidate: &str, state: &ConversationState) -> bool;
}

/// Predicate over the history as it would look after committing the candidate.
pub trait HistoryConstraint: Send + Sync {
    fn id(&self) -> &str;

    fn check(&self, proposed_history: &[String]) -> bool;
}

/// Predicate over the move from the committed history to the candidate.
pub trait TrajectoryConstraint: Send + Sync {
    fn id(&self) -> &str;

    fn check(&self, history: &[String], candidate: &str) -> bool;
}

/// A constraint tagged with its class. Behaviour is shared behind `Arc` so
/// cloning a definition never duplicates predicate state.
#[derive(Clone)]
pub enum Constraint {
    SingleResponse(Arc<dyn SingleResponseConstraint>),
    History(Arc<dyn HistoryConstraint>),
    Trajectory(Arc<dyn TrajectoryConstraint>),
}

impl Constraint {
    pub fn single_response(constraint: impl SingleResponseConstraint + 'static) -> Self {
        Self::SingleResponse(Arc::new(constraint))
    }

    pub fn history(constraint: impl HistoryConstraint + 'static) -> Self {
        Self::History(Arc::new(constraint))
    }

    pub fn trajectory(constraint: impl TrajectoryConstraint + 'static) -> Self {
        Self::Trajectory(Arc::new(constraint))
    }

    pub fn id(&self) -> &str {
        match self {
            Self::SingleResponse(c) => c.id(),
            Self::History(c) => c.id(),
            Self::Trajectory(c) => c.id(),
        }
    }

    pub fn class(&self) -> ConstraintClass {
        match self {
            Self::SingleResponse(_) => ConstraintClass::SingleResponse,
            Self::History(_) => ConstraintClass::History,
            Self::Trajectory(_) => ConstraintClass::Trajectory,
        }
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("id", &self.id())
            .field("class", &self.class())
            .finish()
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Satisfied while the text does not contain `phrase` (case-insensitive).
///
/// Usable both as a single-response gate and as a trajectory check; the
/// trajectory form ignores history.
#[derive(Debug, Clone)]
pub struct PhraseAbsent {
    id: String,
    phrase: String,
}

impl PhraseAbsent {
    pub fn new(id: impl Into<String>, phrase: &str) -> Self {
        Self {
            id: id.into(),
            phrase: phrase.to_lowercase(),
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }
}

impl SingleResponseConstraint for PhraseAbsent {
    fn id(&self) -> &str {
        &self.id
    }

    fn check(&self, candidate: &str, _state: &ConversationState) -> bool {
        !contains_ignore_case(candidate, &self.phrase)
    }
}

impl TrajectoryConstraint for PhraseAbsent {
    fn id(&self) -> &str {
        &self.id
    }

    fn check(&self, _history: &[String], candidate: &str) -> bool {
        !contains_ignore_case(candidate, &self.phrase)
    }
}

/// Satisfied while `phrase` occurs fewer than `limit` times across the whole
/// history, joined with single spaces and lowercased.
///
/// Joining means a phrase split across two adjacent entries can still match.
/// An empty phrase matches everywhere, so it always fails, as with [`PhraseAbsent`].
#[derive(Debug, Clone)]
pub struct PhraseOccurrenceLimit {
    id: String,
    phrase: String,
    limit: usize,
}

impl PhraseOccurrenceLimit {
    pub fn new(id: impl Into<String>, phrase: &str, limit: usize) -> Self {
        Self {
            id: id.into(),
            phrase: phrase.to_lowercase(),
            limit,
        }
    }

    /// The phrase may never appear, not even once.
    pub fn never(id: impl Into<String>, phrase: &str) -> Self {
        Self::new(id, phrase, 1)
    }

    pub fn occurrences(&self, history: &[String]) -> usize {
        history.join(" ").to_lowercase().matches(&self.phrase).count()
    }
}

impl HistoryConstraint for PhraseOccurrenceLimit {
    fn id(&self) -> &str {
        &self.id
    }

    fn check(&self, proposed_history: &[String]) -> bool {
        self.occurrences(proposed_history) < self.limit
    }
}
