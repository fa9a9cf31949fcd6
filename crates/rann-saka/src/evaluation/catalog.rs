use super::domain::{Category, EvaluationMode, Indicator, Tier};
use super::tables::{CYBERSECURITY_CATEGORIES, GENERAL_CATEGORIES};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Static definition of one indicator inside a built-in catalog table.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSpec {
    pub label: &'static str,
    pub description: &'static str,
    pub tier: Tier,
    pub weight: f64,
}

/// Static definition of a category and its indicators, key indicator first.
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    pub name: &'static str,
    pub indicators: &'static [IndicatorSpec],
}

/// Ordered categories for one evaluation mode, carrying live answer and weight state.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    mode: EvaluationMode,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn standard(mode: EvaluationMode) -> Self {
        let specs = match mode {
            EvaluationMode::General => GENERAL_CATEGORIES,
            EvaluationMode::Cybersecurity => CYBERSECURITY_CATEGORIES,
        };
        Self::from_specs(mode, specs)
    }

    pub fn from_specs(mode: EvaluationMode, specs: &[CategorySpec]) -> Self {
        let categories = specs
            .iter()
            .filter(|spec| !spec.indicators.is_empty())
            .map(|spec| {
                let indicators = spec
                    .indicators
                    .iter()
                    .map(|ind| Indicator::new(ind.label, ind.description, ind.tier, ind.weight))
                    .collect();
                Category::new(spec.name, indicators)
            })
            .collect();

        Self { mode, categories }
    }

    /// Loads a catalog from CSV rows of `category,label,description,tier,weight`.
    ///
    /// Rows sharing a category are grouped in order of first appearance, so the first row
    /// of each category becomes its key indicator.
    pub fn from_reader<R: Read>(mode: EvaluationMode, reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut grouped: Vec<(String, Vec<Indicator>)> = Vec::new();

        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let row = record?;
            // line 1 is the header
            let line = index + 2;
            let (category, indicator) = row.validate(line)?;

            let position = match grouped.iter().position(|(name, _)| *name == category) {
                Some(position) => position,
                None => {
                    grouped.push((category.clone(), Vec::new()));
                    grouped.len() - 1
                }
            };
            let slot = &mut grouped[position].1;

            if slot
                .iter()
                .any(|existing| existing.label() == indicator.label())
            {
                return Err(CatalogError::DuplicateLabel {
                    line,
                    category,
                    label: indicator.label().to_string(),
                });
            }
            slot.push(indicator);
        }

        if grouped.is_empty() {
            return Err(CatalogError::Empty);
        }

        let categories = grouped
            .into_iter()
            .map(|(name, indicators)| Category::new(name, indicators))
            .collect();

        Ok(Self { mode, categories })
    }

    pub fn from_path<P: AsRef<Path>>(mode: EvaluationMode, path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(mode, file)
    }

    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub(crate) fn categories_mut(&mut self) -> &mut [Category] {
        &mut self.categories
    }

    pub fn iter_indicators(&self) -> impl Iterator<Item = (&str, &Indicator)> + '_ {
        self.categories.iter().flat_map(|category| {
            category
                .indicators()
                .iter()
                .map(move |indicator| (category.name(), indicator))
        })
    }

    pub fn indicator_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.indicators().len())
            .sum()
    }

    pub fn affirmative_count(&self) -> usize {
        self.iter_indicators()
            .filter(|(_, indicator)| indicator.is_affirmative())
            .count()
    }

    /// Width of the longest question text, used for separator lines.
    pub fn longest_label_width(&self) -> usize {
        self.iter_indicators()
            .map(|(_, indicator)| indicator.question().chars().count())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    category: String,
    label: String,
    #[serde(default)]
    description: String,
    tier: u8,
    weight: f64,
}

impl CatalogRow {
    fn validate(self, line: usize) -> Result<(String, Indicator), CatalogError> {
        if self.category.is_empty() {
            return Err(CatalogError::MissingCategory { line });
        }
        if self.label.is_empty() {
            return Err(CatalogError::MissingLabel { line });
        }
        let tier = Tier::from_level(self.tier).ok_or(CatalogError::InvalidTier {
            line,
            tier: self.tier,
        })?;
        // a zero or negative weight would let the maximum possible score reach zero
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(CatalogError::InvalidWeight {
                line,
                weight: self.weight,
            });
        }

        let indicator = Indicator::new(self.label, self.description, tier, self.weight);
        Ok((self.category, indicator))
    }
}

/// Errors raised when loading a custom catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog defines no indicators")]
    Empty,
    #[error("line {line}: category name is empty")]
    MissingCategory { line: usize },
    #[error("line {line}: indicator label is empty")]
    MissingLabel { line: usize },
    #[error("line {line}: tier must be 1, 2 or 3 (got {tier})")]
    InvalidTier { line: usize, tier: u8 },
    #[error("line {line}: weight must be a positive finite number (got {weight})")]
    InvalidWeight { line: usize, weight: f64 },
    #[error("line {line}: duplicate indicator '{label}' in category '{category}'")]
    DuplicateLabel {
        line: usize,
        category: String,
        label: String,
    },
}
