use super::common::*;
use crate::evaluation::{aggregate, Catalog, EvaluationMode, Tier, TierWeights};

#[test]
fn all_negative_answers_score_zero() {
    let mut catalog = Catalog::standard(EvaluationMode::General);
    let answers = vec![false; catalog.indicator_count()];
    answer_all(&mut catalog, &answers);

    let score = aggregate(&catalog, &standard_tier_weights());

    assert_eq!(score.weighted_sum, 0.0);
    assert_eq!(score.weighted_percentage, 0.0);
    assert_eq!(format!("{:.2}", score.weighted_percentage), "0.00");
    assert_eq!(score.affirmative, 0);
    assert_eq!(score.total_indicators, 33);
}

#[test]
fn all_affirmative_answers_score_one_hundred() {
    let mut catalog = Catalog::standard(EvaluationMode::Cybersecurity);
    let answers = vec![true; catalog.indicator_count()];
    answer_all(&mut catalog, &answers);

    let score = aggregate(&catalog, &standard_tier_weights());

    assert_eq!(score.weighted_percentage, 100.0);
    assert_eq!(score.weighted_sum, score.max_possible);
    assert_eq!(score.affirmative, 32);
}

#[test]
fn weighted_sum_uses_tier_multipliers() {
    let mut catalog = scenario_catalog();
    answer_all(&mut catalog, &[false, true, true]);

    let score = aggregate(&catalog, &standard_tier_weights());

    // 2 * 1.0 + 1 * 0.8 out of 3 * 1.3 + 2 * 1.0 + 1 * 0.8
    assert_close(score.weighted_sum, 2.8);
    assert_close(score.max_possible, 6.7);
    assert_close(score.weighted_percentage, 100.0 * 2.8 / 6.7);
}

#[test]
fn tier_counts_ignore_weights_and_sum_to_affirmative_total() {
    let mut catalog = Catalog::from_specs(EvaluationMode::General, TWO_CATEGORIES);
    answer_all(&mut catalog, &[true, true, false, true]);

    let score = aggregate(&catalog, &standard_tier_weights());

    assert_eq!(score.tier_counts.get(Tier::Most), 1);
    assert_eq!(score.tier_counts.get(Tier::Less), 1);
    assert_eq!(score.tier_counts.get(Tier::Moderate), 1);
    assert_eq!(score.tier_counts.total(), score.affirmative);
    assert_eq!(score.affirmative, catalog.affirmative_count());
}

#[test]
fn percentage_stays_within_bounds_for_mixed_answers() {
    let weights = TierWeights::standard();
    for pattern in 0u32..16 {
        let mut catalog = Catalog::from_specs(EvaluationMode::General, TWO_CATEGORIES);
        let answers: Vec<bool> = (0..4).map(|bit| pattern & (1 << bit) != 0).collect();
        answer_all(&mut catalog, &answers);

        let score = aggregate(&catalog, &weights);
        assert!((0.0..=100.0).contains(&score.weighted_percentage));
        assert_eq!(score.weighted_percentage == 0.0, pattern == 0);
        assert_eq!(score.weighted_percentage == 100.0, pattern == 15);
    }
}

#[test]
fn unanswered_indicators_count_as_negative() {
    let mut catalog = scenario_catalog();
    answer_all(&mut catalog, &[true]);

    let score = aggregate(&catalog, &standard_tier_weights());

    assert_eq!(score.affirmative, 1);
    assert_close(score.weighted_sum, 3.9);
}
