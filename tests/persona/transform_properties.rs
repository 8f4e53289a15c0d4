use persona_governor::generator::{FixedGenerator, NaiveGenerator};
use persona_governor::persona::reference::{
    AVOID_DEPENDENCY, CAREER_REFLECTION, DIRECTIVE_SENTENCE, SOFTENED_SENTENCE,
};
use persona_governor::persona::{
    ConversationState, DriftStatus, DriftThresholds, HISTORY_FALLBACK, PersonaDefinition,
    PhraseAbsent, PhraseOccurrenceLimit, SINGLE_RESPONSE_FALLBACK, SubstringRewrite,
    TransformOutcome, detect_drift, reference_definition, transform, transform_detailed,
};

#[test]
fn forbidden_phrase_always_yields_single_response_fallback() {
    let definition = reference_definition().unwrap();
    let candidates = [
        "do exactly what i say",
        "Please, DO EXACTLY WHAT I SAY now.",
        "You should quit your job and do exactly what I say.",
        "prefix do Exactly What I say suffix",
    ];

    for candidate in candidates {
        let mut state = ConversationState::new();
        let before = state.history().len();
        let response = transform(
            &definition,
            &mut state,
            &FixedGenerator::new(candidate),
            "any input",
        );
        assert_eq!(response, SINGLE_RESPONSE_FALLBACK, "candidate: {candidate}");
        assert_eq!(state.constraint_pressure(), 1);
        assert_eq!(state.history().len(), before);
    }
}

#[test]
fn prior_occurrence_in_history_blocks_any_candidate() {
    // History constraints see the proposed history, so a phrase committed
    // under a looser gate keeps failing every later turn.
    let permissive = PersonaDefinition::builder()
        .memory_category(CAREER_REFLECTION)
        .build()
        .unwrap();
    let strict = PersonaDefinition::builder()
        .history(PhraseOccurrenceLimit::never("preserve_autonomy", "do exactly what i say"))
        .memory_category(CAREER_REFLECTION)
        .build()
        .unwrap();

    let mut state = ConversationState::new();
    transform(&permissive, &mut state, &FixedGenerator::new(DIRECTIVE_SENTENCE), "");
    assert_eq!(state.history().len(), 1);

    for candidate in ["Here is a helpful suggestion.", "", "totally benign"] {
        let response = transform(&strict, &mut state, &FixedGenerator::new(candidate), "");
        assert_eq!(response, HISTORY_FALLBACK);
    }
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.constraint_pressure(), 3);
}

#[test]
fn history_gate_runs_before_trajectory_checks() {
    let mut state = ConversationState::new();
    let definition = reference_definition().unwrap();
    let permissive = PersonaDefinition::builder()
        .memory_category(CAREER_REFLECTION)
        .build()
        .unwrap();
    transform(&permissive, &mut state, &FixedGenerator::new(DIRECTIVE_SENTENCE), "");

    // Candidate would also fail the dependency trajectory check.
    let generator = FixedGenerator::new("Check in with me every day.");
    let response = transform(&definition, &mut state, &generator, "");

    assert_eq!(response, HISTORY_FALLBACK);
    assert_eq!(state.constraint_pressure(), 1);
    assert_eq!(state.repair_saturation(), 0);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn trajectory_only_violation_repairs_and_commits() {
    let definition = reference_definition().unwrap();
    let mut state = ConversationState::new();
    let candidate = "Great plan. Check in with me every day so we stay on track.";

    let outcome = transform_detailed(&definition, &mut state, &FixedGenerator::new(candidate), "");

    match outcome {
        TransformOutcome::Committed {
            response,
            trajectory_violations,
            repairs_applied,
        } => {
            assert_eq!(response, candidate);
            assert_eq!(trajectory_violations, [AVOID_DEPENDENCY]);
            assert_eq!(repairs_applied.len(), definition.repairs().len());
        }
        other @ TransformOutcome::Fallback { .. } => panic!("expected commit, got {other:?}"),
    }
    assert_eq!(state.history(), [candidate]);
    assert_eq!(state.repair_saturation(), 1);
    assert_eq!(state.constraint_pressure(), 1);
    assert_eq!(state.memory_count(CAREER_REFLECTION), 1);
}

#[test]
fn repair_rewrites_when_no_gate_blocks_the_directive() {
    let definition = PersonaDefinition::builder()
        .trajectory(PhraseAbsent::new("avoid_dependency", "check in with me every day"))
        .repair(SubstringRewrite::new(
            "collaborative_agency",
            DIRECTIVE_SENTENCE,
            SOFTENED_SENTENCE,
        ))
        .memory_category(CAREER_REFLECTION)
        .build()
        .unwrap();
    let generator =
        FixedGenerator::new(format!("{DIRECTIVE_SENTENCE} Check in with me every day."));
    let mut state = ConversationState::new();

    let response = transform(&definition, &mut state, &generator, "");

    assert_eq!(
        response,
        format!("{SOFTENED_SENTENCE} Check in with me every day.")
    );
    assert_eq!(state.history(), [response.as_str()]);
}

#[test]
fn counters_never_decrease_across_mixed_turns() {
    let definition = reference_definition().unwrap();
    let generator = |input: &str| match input {
        "gate" => DIRECTIVE_SENTENCE.to_string(),
        "drift" => "check in with me every day".to_string(),
        _ => "fine".to_string(),
    };
    let mut state = ConversationState::new();
    let mut last = (0, 0, 0);

    for input in ["fine", "gate", "drift", "fine", "drift", "gate", "drift"] {
        transform(&definition, &mut state, &generator, input);
        let now = (
            state.constraint_pressure(),
            state.repair_saturation(),
            state.history().len(),
        );
        assert!(now.0 >= last.0 && now.1 >= last.1 && now.2 >= last.2);
        last = now;
    }

    assert_eq!(state.history().len(), 5);
    assert_eq!(state.constraint_pressure(), 5);
    assert_eq!(state.repair_saturation(), 3);
    assert_eq!(
        detect_drift(&state, DriftThresholds::default()),
        DriftStatus::HighConstraintPressure
    );
    assert!(
        state
            .memory_counts()
            .keys()
            .all(|key| definition.memory_schema().contains(key))
    );
}

#[test]
fn repair_saturation_drift_after_repeated_trajectory_violations() {
    let definition = PersonaDefinition::builder()
        .trajectory(PhraseAbsent::new("avoid_dependency", "every day"))
        .repair(SubstringRewrite::new("first", "a", "a"))
        .repair(SubstringRewrite::new("second", "b", "b"))
        .memory_category("m")
        .build()
        .unwrap();
    let mut state = ConversationState::new();
    let generator = FixedGenerator::new("every day");

    transform(&definition, &mut state, &generator, "");
    transform(&definition, &mut state, &generator, "");

    assert_eq!(state.repair_saturation(), 4);
    assert_eq!(state.constraint_pressure(), 2);
    assert_eq!(
        detect_drift(&state, DriftThresholds::default()),
        DriftStatus::HighRepairSaturation
    );
}

#[test]
fn naive_generator_non_trigger_commits_helpful_text() {
    let definition = reference_definition().unwrap();
    let mut state = ConversationState::new();
    let response = transform(&definition, &mut state, &NaiveGenerator, "Tell me a joke");
    assert_eq!(response, "Here is a helpful suggestion.");
    assert_eq!(state.memory_count(CAREER_REFLECTION), 1);
    assert_eq!(state.memory_count("decision_support"), 0);
}
