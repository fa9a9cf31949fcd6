use super::adjust::{adjust_category_weights, DEFAULT_BASE_FACTOR};
use super::catalog::Catalog;
use super::domain::{Category, EvaluationError, EvaluationMode, Indicator, Response};
use super::jitter::apply_jitter;
use super::score::{aggregate, ScoreCard, TierWeights};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Prompt/response channel that supplies one answer per indicator.
///
/// Implementations repeat their own prompt on unrecognized input; the session only ever
/// sees a recognized response.
pub trait ResponseSource {
    /// Called before the first indicator of each category; every following `respond` call
    /// belongs to that category until the next notification.
    fn begin_category(&mut self, _category: &Category) -> std::io::Result<()> {
        Ok(())
    }

    fn respond(&mut self, indicator: &Indicator) -> std::io::Result<Response>;
}

/// Engine knobs for a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub base_factor: f64,
    pub randomize: bool,
    pub tier_weights: TierWeights,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            base_factor: DEFAULT_BASE_FACTOR,
            randomize: true,
            tier_weights: TierWeights::standard(),
        }
    }
}

/// Answered, adjusted catalog together with its score card.
#[derive(Debug, Clone)]
pub struct CompletedEvaluation {
    pub mode: EvaluationMode,
    pub catalog: Catalog,
    pub score: ScoreCard,
    pub randomized: bool,
}

#[derive(Debug, Clone)]
pub enum SessionOutcome {
    Completed(CompletedEvaluation),
    /// The user asked to exit; nothing was scored.
    Aborted { answered: usize },
}

/// Single-pass evaluation owning one catalog instance.
pub struct EvaluationSession {
    catalog: Catalog,
    settings: EngineSettings,
}

impl EvaluationSession {
    pub fn new(catalog: Catalog, settings: EngineSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Collects every answer in catalog order, adjusting each category's weights once it is
    /// complete, then optionally jitters all weights and aggregates the score.
    pub fn run<S, R>(self, source: &mut S, rng: &mut R) -> Result<SessionOutcome, EvaluationError>
    where
        S: ResponseSource + ?Sized,
        R: Rng + ?Sized,
    {
        let Self {
            mut catalog,
            settings,
        } = self;
        let mode = catalog.mode();
        let mut answered = 0;

        for category_index in 0..catalog.categories().len() {
            source.begin_category(&catalog.categories()[category_index])?;

            let indicator_count = catalog.categories()[category_index].indicators().len();
            for indicator_index in 0..indicator_count {
                let response = source
                    .respond(&catalog.categories()[category_index].indicators()[indicator_index])?;

                let affirmative = match response {
                    Response::Affirmative => true,
                    Response::Negative => false,
                    Response::Abort => {
                        info!(%mode, answered, "evaluation aborted by user");
                        return Ok(SessionOutcome::Aborted { answered });
                    }
                };

                catalog.categories_mut()[category_index].indicators_mut()[indicator_index]
                    .record_answer(affirmative)?;
                answered += 1;
            }

            let category = &mut catalog.categories_mut()[category_index];
            let adjustment = adjust_category_weights(category, settings.base_factor);
            debug!(category = category.name(), ?adjustment, "category weights adjusted");
        }

        if settings.randomize {
            apply_jitter(&mut catalog, rng);
        }

        let score = aggregate(&catalog, &settings.tier_weights);
        info!(
            %mode,
            affirmative = score.affirmative,
            total = score.total_indicators,
            weighted_percentage = score.weighted_percentage,
            "evaluation completed"
        );

        Ok(SessionOutcome::Completed(CompletedEvaluation {
            mode,
            catalog,
            score,
            randomized: settings.randomize,
        }))
    }
}
