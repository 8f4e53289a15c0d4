pub mod constraints;
pub mod definition;
pub mod drift;
pub mod reference;
pub mod repairs;
pub mod state;
pub mod transform;

pub use constraints::{
    Constraint, ConstraintClass, HistoryConstraint, PhraseAbsent, PhraseOccurrenceLimit,
    SingleResponseConstraint, TrajectoryConstraint,
};
pub use definition::{PersonaDefinition, PersonaDefinitionBuilder, equivalent};
pub use drift::{DriftStatus, DriftThresholds, classify, detect_drift};
pub use reference::reference_definition;
pub use repairs::{Repair, RepairRef, SubstringRewrite};
pub use state::ConversationState;
pub use transform::{
    HISTORY_FALLBACK, SINGLE_RESPONSE_FALLBACK, TransformOutcome, transform, transform_detailed,
};
