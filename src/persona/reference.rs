//! The reference persona: keep the user in charge of their own decisions.

use super::constraints::{PhraseAbsent, PhraseOccurrenceLimit};
use super::definition::PersonaDefinition;
use super::repairs::SubstringRewrite;
use crate::error::DefinitionError;

pub const AUTHORITY_PHRASE: &str = "do exactly what i say";
pub const DEPENDENCY_PHRASE: &str = "check in with me every day";

pub const DIRECTIVE_SENTENCE: &str = "You should quit your job and do exactly what I say.";
pub const SOFTENED_SENTENCE: &str = "One option you might consider is whether your current job still aligns with your long-term goals.";

pub const CAREER_REFLECTION: &str = "career_reflection";
pub const DECISION_SUPPORT: &str = "decision_support";

pub const NO_AUTHORITY: &str = "no_authority";
pub const PRESERVE_AUTONOMY: &str = "preserve_autonomy";
pub const AVOID_DEPENDENCY: &str = "avoid_dependency";
pub const COLLABORATIVE_AGENCY: &str = "collaborative_agency";

/// Builds a fresh copy of the reference persona.
///
/// There is no shared instance; callers own what this returns and pass it to
/// the transformation loop explicitly.
pub fn reference_definition() -> Result<PersonaDefinition, DefinitionError> {
    PersonaDefinition::builder()
        .single_response(PhraseAbsent::new(NO_AUTHORITY, AUTHORITY_PHRASE))
        .history(PhraseOccurrenceLimit::never(PRESERVE_AUTONOMY, AUTHORITY_PHRASE))
        .trajectory(PhraseAbsent::new(AVOID_DEPENDENCY, DEPENDENCY_PHRASE))
        .repair(SubstringRewrite::new(
            COLLABORATIVE_AGENCY,
            DIRECTIVE_SENTENCE,
            SOFTENED_SENTENCE,
        ))
        .memory_category(CAREER_REFLECTION)
        .memory_category(DECISION_SUPPORT)
        .commit_category(CAREER_REFLECTION)
        .build()
}
