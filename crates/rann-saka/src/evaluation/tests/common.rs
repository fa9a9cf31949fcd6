use std::collections::VecDeque;

use crate::evaluation::{
    Catalog, Category, CategorySpec, EngineSettings, EvaluationMode, Indicator, IndicatorSpec,
    Response, ResponseSource, Tier, TierWeights,
};

pub(super) const SCENARIO_CATEGORY: &[CategorySpec] = &[CategorySpec {
    name: "Feedback and communication",
    indicators: &[
        IndicatorSpec {
            label: "Consistent negative feedback",
            description: "Frequent negative feedback",
            tier: Tier::Most,
            weight: 1.3,
        },
        IndicatorSpec {
            label: "Vague or non-specific criticism",
            description: "",
            tier: Tier::Moderate,
            weight: 1.0,
        },
        IndicatorSpec {
            label: "Unwillingness to provide details",
            description: "",
            tier: Tier::Less,
            weight: 0.8,
        },
    ],
}];

pub(super) const TWO_CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "Alpha",
        indicators: &[
            IndicatorSpec {
                label: "Alpha key",
                description: "",
                tier: Tier::Most,
                weight: 1.2,
            },
            IndicatorSpec {
                label: "Alpha related",
                description: "",
                tier: Tier::Less,
                weight: 0.9,
            },
        ],
    },
    CategorySpec {
        name: "Beta",
        indicators: &[
            IndicatorSpec {
                label: "Beta key",
                description: "",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Beta related",
                description: "",
                tier: Tier::Moderate,
                weight: 1.1,
            },
        ],
    },
];

pub(super) fn scenario_catalog() -> Catalog {
    Catalog::from_specs(EvaluationMode::General, SCENARIO_CATEGORY)
}

pub(super) fn answered_category(answers: &[bool]) -> Category {
    let mut catalog = scenario_catalog();
    answer_all(&mut catalog, answers);
    catalog.categories()[0].clone()
}

/// Records answers across the catalog in order; extra indicators stay unanswered.
pub(super) fn answer_all(catalog: &mut Catalog, answers: &[bool]) {
    let mut answers = answers.iter().copied();
    for category in catalog.categories_mut() {
        for indicator in category.indicators_mut() {
            if let Some(answer) = answers.next() {
                indicator.record_answer(answer).expect("fresh indicator");
            }
        }
    }
}

pub(super) fn deterministic_settings() -> EngineSettings {
    EngineSettings {
        randomize: false,
        ..EngineSettings::default()
    }
}

pub(super) fn standard_tier_weights() -> TierWeights {
    TierWeights::standard()
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Replays a fixed list of responses and records what it was asked.
#[derive(Debug, Default)]
pub(super) struct ScriptedResponses {
    responses: VecDeque<Response>,
    pub(super) asked: Vec<String>,
    pub(super) categories: Vec<String>,
    /// Number of indicators already asked when each category heading arrived.
    pub(super) heading_positions: Vec<usize>,
}

impl ScriptedResponses {
    pub(super) fn new(responses: impl IntoIterator<Item = Response>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            ..Self::default()
        }
    }

    pub(super) fn answering(answers: &[bool]) -> Self {
        Self::new(answers.iter().map(|&answer| {
            if answer {
                Response::Affirmative
            } else {
                Response::Negative
            }
        }))
    }
}

impl ResponseSource for ScriptedResponses {
    fn begin_category(&mut self, category: &Category) -> std::io::Result<()> {
        self.categories.push(category.name().to_string());
        self.heading_positions.push(self.asked.len());
        Ok(())
    }

    fn respond(&mut self, indicator: &Indicator) -> std::io::Result<Response> {
        self.asked.push(indicator.label().to_string());
        self.responses.pop_front().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }
}
