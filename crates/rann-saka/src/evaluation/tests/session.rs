use super::common::*;
use crate::evaluation::{
    session_rng, Catalog, EngineSettings, EvaluationError, EvaluationMode, EvaluationSession,
    Response, SessionOutcome, JITTER_MAX, JITTER_MIN,
};

fn completed(outcome: SessionOutcome) -> crate::evaluation::CompletedEvaluation {
    match outcome {
        SessionOutcome::Completed(evaluation) => evaluation,
        other => panic!("expected completed evaluation, got {other:?}"),
    }
}

#[test]
fn session_adjusts_each_category_and_scores_the_catalog() {
    let catalog = scenario_catalog();
    let mut source = ScriptedResponses::answering(&[true, true, false]);
    let session = EvaluationSession::new(catalog, deterministic_settings());

    let evaluation = completed(
        session
            .run(&mut source, &mut session_rng(Some(1)))
            .expect("session runs"),
    );

    let weights: Vec<f64> = evaluation
        .catalog
        .iter_indicators()
        .map(|(_, indicator)| indicator.weight())
        .collect();
    assert_close(weights[0], 4.3875);
    assert_close(weights[1], 2.25);
    assert_close(weights[2], 1.2);
    assert_eq!(evaluation.score.affirmative, 2);
    assert!(!evaluation.randomized);
    assert_eq!(source.categories, vec!["Feedback and communication"]);
}

#[test]
fn session_asks_indicators_in_catalog_order() {
    let catalog = Catalog::from_specs(EvaluationMode::General, TWO_CATEGORIES);
    let mut source = ScriptedResponses::answering(&[false, false, false, false]);

    EvaluationSession::new(catalog, deterministic_settings())
        .run(&mut source, &mut session_rng(Some(1)))
        .expect("session runs");

    assert_eq!(
        source.asked,
        vec!["Alpha key", "Alpha related", "Beta key", "Beta related"]
    );
    assert_eq!(source.categories, vec!["Alpha", "Beta"]);
}

#[test]
fn category_heading_precedes_its_indicators() {
    let catalog = Catalog::from_specs(EvaluationMode::General, TWO_CATEGORIES);
    let mut source = ScriptedResponses::answering(&[true, false, false, true]);

    EvaluationSession::new(catalog, deterministic_settings())
        .run(&mut source, &mut session_rng(Some(1)))
        .expect("session runs");

    assert_eq!(source.heading_positions, vec![0, 2]);
}

#[test]
fn exit_at_third_indicator_aborts_without_scoring() {
    let catalog = Catalog::standard(EvaluationMode::General);
    let mut source = ScriptedResponses::new([
        Response::Affirmative,
        Response::Negative,
        Response::Abort,
        Response::Affirmative,
    ]);

    let outcome = EvaluationSession::new(catalog, EngineSettings::default())
        .run(&mut source, &mut session_rng(Some(1)))
        .expect("abort is not an error");

    match outcome {
        SessionOutcome::Aborted { answered } => assert_eq!(answered, 2),
        other => panic!("expected abort, got {other:?}"),
    }
    assert_eq!(source.asked.len(), 3);
}

#[test]
fn randomized_session_stays_within_jitter_bounds() {
    let mut source = ScriptedResponses::answering(&[true, true, false]);
    let evaluation = completed(
        EvaluationSession::new(scenario_catalog(), EngineSettings::default())
            .run(&mut source, &mut session_rng(Some(99)))
            .expect("session runs"),
    );

    let adjusted = [4.3875, 2.25, 1.2];
    for (expected, (_, indicator)) in adjusted.iter().zip(evaluation.catalog.iter_indicators()) {
        let ratio = indicator.weight() / expected;
        assert!((JITTER_MIN - 1e-9..=JITTER_MAX + 1e-9).contains(&ratio));
    }
    assert!(evaluation.randomized);
}

#[test]
fn collector_failures_surface_as_errors() {
    let mut source = ScriptedResponses::answering(&[true]);

    let result = EvaluationSession::new(scenario_catalog(), deterministic_settings())
        .run(&mut source, &mut session_rng(Some(1)));

    assert!(matches!(result, Err(EvaluationError::Collector(_))));
}
