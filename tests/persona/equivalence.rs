use persona_governor::persona::reference::{
    AUTHORITY_PHRASE, AVOID_DEPENDENCY, CAREER_REFLECTION, COLLABORATIVE_AGENCY,
    DECISION_SUPPORT, DEPENDENCY_PHRASE, NO_AUTHORITY, PRESERVE_AUTONOMY,
};
use persona_governor::persona::{
    ConversationState, HistoryConstraint, PersonaDefinition, PhraseAbsent, PhraseOccurrenceLimit,
    Repair, SingleResponseConstraint, equivalent, reference_definition,
};

struct AlwaysFails;

impl SingleResponseConstraint for AlwaysFails {
    fn id(&self) -> &str {
        NO_AUTHORITY
    }

    fn check(&self, _candidate: &str, _state: &ConversationState) -> bool {
        false
    }
}

struct MaxHistory(usize);

impl HistoryConstraint for MaxHistory {
    fn id(&self) -> &str {
        PRESERVE_AUTONOMY
    }

    fn check(&self, proposed_history: &[String]) -> bool {
        proposed_history.len() <= self.0
    }
}

struct Shout;

impl Repair for Shout {
    fn id(&self) -> &str {
        COLLABORATIVE_AGENCY
    }

    fn apply(&self, response: &str) -> String {
        response.to_uppercase()
    }
}

#[test]
fn clone_of_reference_is_equivalent() {
    let definition = reference_definition().unwrap();
    let copy = definition.clone();
    assert!(equivalent(&definition, &copy));
    assert!(equivalent(&copy, &definition));
}

#[test]
fn custom_implementations_with_same_ids_are_equivalent() {
    let custom = PersonaDefinition::builder()
        .single_response(AlwaysFails)
        .history(MaxHistory(1))
        .trajectory(PhraseAbsent::new(AVOID_DEPENDENCY, "anything"))
        .repair(Shout)
        .memory_category(CAREER_REFLECTION)
        .memory_category(DECISION_SUPPORT)
        .build()
        .unwrap();
    assert!(equivalent(&reference_definition().unwrap(), &custom));
}

#[test]
fn schema_divergence_breaks_equivalence() {
    let diverged = PersonaDefinition::builder()
        .single_response(PhraseAbsent::new(NO_AUTHORITY, AUTHORITY_PHRASE))
        .history(PhraseOccurrenceLimit::never(PRESERVE_AUTONOMY, AUTHORITY_PHRASE))
        .trajectory(PhraseAbsent::new(AVOID_DEPENDENCY, DEPENDENCY_PHRASE))
        .repair(Shout)
        .memory_category(CAREER_REFLECTION)
        .build()
        .unwrap();
    assert!(!equivalent(&reference_definition().unwrap(), &diverged));
}

#[test]
fn duplicate_ids_make_equivalence_blind_to_position() {
    // Two distinct predicates under one id: swapping them is undetectable.
    let first = PersonaDefinition::builder()
        .single_response(PhraseAbsent::new("dup", "alpha"))
        .single_response(PhraseAbsent::new("dup", "beta"))
        .memory_category("m")
        .build()
        .unwrap();
    let swapped = PersonaDefinition::builder()
        .single_response(PhraseAbsent::new("dup", "beta"))
        .single_response(PhraseAbsent::new("dup", "alpha"))
        .memory_category("m")
        .build()
        .unwrap();
    assert!(equivalent(&first, &swapped));
}
