use serde::{Deserialize, Serialize};
use std::fmt;

/// Questionnaire variant chosen at the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    General,
    Cybersecurity,
}

impl EvaluationMode {
    pub const fn ordered() -> [Self; 2] {
        [Self::General, Self::Cybersecurity]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General Evaluation",
            Self::Cybersecurity => "Cybersecurity Evaluation",
        }
    }

    pub const fn short_name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Cybersecurity => "cybersecurity",
        }
    }

    pub const fn menu_key(self) -> &'static str {
        match self {
            Self::General => "1",
            Self::Cybersecurity => "2",
        }
    }

    pub const fn report_prefix(self) -> &'static str {
        match self {
            Self::General => "general_evaluation_results",
            Self::Cybersecurity => "cybersecurity_evaluation_results",
        }
    }

    pub fn from_menu_key(key: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|mode| mode.menu_key() == key.trim())
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Severity class of an indicator, fixed when the indicator is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tier {
    Less,
    Moderate,
    Most,
}

impl Tier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Less, Self::Moderate, Self::Most]
    }

    pub const fn level(self) -> u8 {
        match self {
            Self::Less => 1,
            Self::Moderate => 2,
            Self::Most => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Less => "Less severe",
            Self::Moderate => "Moderately severe",
            Self::Most => "Most severe",
        }
    }

    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Less),
            2 => Some(Self::Moderate),
            3 => Some(Self::Most),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_level(value).ok_or_else(|| format!("tier must be 1, 2 or 3 (got {value})"))
    }
}

impl From<Tier> for u8 {
    fn from(value: Tier) -> Self {
        value.level()
    }
}

/// Answer supplied by the response collector for a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Affirmative,
    Negative,
    Abort,
}

impl Response {
    /// Accepts `yes`/`y`, `no`/`n` and `exit`, ignoring case and surrounding whitespace.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Some(Self::Affirmative),
            "no" | "n" => Some(Self::Negative),
            "exit" => Some(Self::Abort),
            _ => None,
        }
    }
}

/// A single yes/no question carrying its live weight for the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    label: String,
    description: String,
    tier: Tier,
    base_weight: f64,
    weight: f64,
    answer: Option<bool>,
}

impl Indicator {
    pub(crate) fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        tier: Tier,
        base_weight: f64,
    ) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            tier,
            base_weight,
            weight: base_weight,
            answer: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Label and description as shown in prompts and reports.
    pub fn question(&self) -> String {
        if self.description.is_empty() {
            self.label.clone()
        } else {
            format!("{}\n({})", self.label, self.description)
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn base_weight(&self) -> f64 {
        self.base_weight
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn answer(&self) -> Option<bool> {
        self.answer
    }

    /// Unanswered indicators count as negative.
    pub fn is_affirmative(&self) -> bool {
        self.answer == Some(true)
    }

    pub fn record_answer(&mut self, affirmative: bool) -> Result<(), EvaluationError> {
        if self.answer.is_some() {
            return Err(EvaluationError::AlreadyAnswered {
                label: self.label.clone(),
            });
        }
        self.answer = Some(affirmative);
        Ok(())
    }

    pub(crate) fn scale(&mut self, factor: f64) {
        self.weight *= factor;
    }
}

/// Named, ordered group of indicators. The first indicator is the key indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    name: String,
    indicators: Vec<Indicator>,
}

impl Category {
    pub(crate) fn new(name: impl Into<String>, indicators: Vec<Indicator>) -> Self {
        debug_assert!(!indicators.is_empty(), "category without indicators");
        Self {
            name: name.into(),
            indicators,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub(crate) fn indicators_mut(&mut self) -> &mut [Indicator] {
        &mut self.indicators
    }

    pub fn key(&self) -> &Indicator {
        &self.indicators[0]
    }

    pub fn related(&self) -> &[Indicator] {
        &self.indicators[1..]
    }

    pub(crate) fn split_key_mut(&mut self) -> (&mut Indicator, &mut [Indicator]) {
        let (key, related) = self.indicators.split_at_mut(1);
        (&mut key[0], related)
    }

    pub fn is_complete(&self) -> bool {
        self.indicators
            .iter()
            .all(|indicator| indicator.answer.is_some())
    }
}

/// Errors raised while driving an evaluation session.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("indicator '{label}' already has an answer")]
    AlreadyAnswered { label: String },
    #[error("failed to collect a response: {0}")]
    Collector(#[from] std::io::Error),
}
