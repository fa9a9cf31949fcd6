use crate::evaluation::{CompletedEvaluation, EvaluationMode, ScoreCard, Tier};
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorView {
    pub category: String,
    pub label: String,
    pub description: String,
    pub tier: Tier,
    pub tier_label: &'static str,
    pub base_weight: f64,
    pub final_weight: f64,
    pub affirmative: bool,
}

/// Structured form of a saved report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub mode: EvaluationMode,
    pub mode_label: &'static str,
    pub generated_at: DateTime<Local>,
    pub randomized: bool,
    pub score: ScoreCard,
    pub indicators: Vec<IndicatorView>,
}

impl ReportView {
    pub fn new(evaluation: &CompletedEvaluation, generated_at: DateTime<Local>) -> Self {
        let indicators = evaluation
            .catalog
            .iter_indicators()
            .map(|(category, indicator)| IndicatorView {
                category: category.to_string(),
                label: indicator.label().to_string(),
                description: indicator.description().to_string(),
                tier: indicator.tier(),
                tier_label: indicator.tier().label(),
                base_weight: indicator.base_weight(),
                final_weight: indicator.weight(),
                affirmative: indicator.is_affirmative(),
            })
            .collect();

        Self {
            mode: evaluation.mode,
            mode_label: evaluation.mode.label(),
            generated_at,
            randomized: evaluation.randomized,
            score: evaluation.score.clone(),
            indicators,
        }
    }
}
