//! Indicator catalogs and the scoring engine that turns yes/no answers into a weighted
//! likelihood of unfounded criticism or accusations.

pub mod adjust;
pub mod catalog;
pub mod domain;
pub mod jitter;
pub mod score;
pub mod session;
mod tables;

#[cfg(test)]
mod tests;

pub use adjust::{adjust_category_weights, Adjustment, DEFAULT_BASE_FACTOR};
pub use catalog::{Catalog, CatalogError, CategorySpec, IndicatorSpec};
pub use domain::{Category, EvaluationError, EvaluationMode, Indicator, Response, Tier};
pub use jitter::{apply_jitter, session_rng, JITTER_MAX, JITTER_MIN};
pub use score::{aggregate, ScoreCard, TierCounts, TierWeights};
pub use session::{
    CompletedEvaluation, EngineSettings, EvaluationSession, ResponseSource, SessionOutcome,
};
