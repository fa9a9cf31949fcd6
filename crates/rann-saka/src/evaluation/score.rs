use super::catalog::Catalog;
use super::domain::Tier;
use serde::{Deserialize, Serialize};

/// Integer severity multiplier per tier, read-only for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierWeights {
    pub less: u32,
    pub moderate: u32,
    pub most: u32,
}

impl TierWeights {
    pub const fn standard() -> Self {
        Self {
            less: 1,
            moderate: 2,
            most: 3,
        }
    }

    pub const fn multiplier(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Less => self.less,
            Tier::Moderate => self.moderate,
            Tier::Most => self.most,
        }
    }
}

impl Default for TierWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// Affirmative indicators per tier. Counts ignore weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub less: usize,
    pub moderate: usize,
    pub most: usize,
}

impl TierCounts {
    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::Less => self.less,
            Tier::Moderate => self.moderate,
            Tier::Most => self.most,
        }
    }

    pub fn total(&self) -> usize {
        self.less + self.moderate + self.most
    }

    fn increment(&mut self, tier: Tier) {
        match tier {
            Tier::Less => self.less += 1,
            Tier::Moderate => self.moderate += 1,
            Tier::Most => self.most += 1,
        }
    }
}

/// Derived metrics for a fully answered and weighted catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub weighted_sum: f64,
    pub max_possible: f64,
    pub weighted_percentage: f64,
    pub tier_counts: TierCounts,
    pub total_indicators: usize,
    pub affirmative: usize,
}

/// Aggregates the catalog's current weight state into a score card.
///
/// Every indicator carries a strictly positive weight and every tier multiplier is at least
/// one, so `max_possible` is positive for any non-empty catalog.
pub fn aggregate(catalog: &Catalog, tier_weights: &TierWeights) -> ScoreCard {
    let mut weighted_sum = 0.0;
    let mut max_possible = 0.0;
    let mut tier_counts = TierCounts::default();
    let mut total_indicators = 0;

    for (_, indicator) in catalog.iter_indicators() {
        let contribution = f64::from(tier_weights.multiplier(indicator.tier())) * indicator.weight();
        max_possible += contribution;
        total_indicators += 1;

        if indicator.is_affirmative() {
            weighted_sum += contribution;
            tier_counts.increment(indicator.tier());
        }
    }

    let weighted_percentage = if max_possible > 0.0 {
        100.0 * weighted_sum / max_possible
    } else {
        0.0
    };

    ScoreCard {
        weighted_sum,
        max_possible,
        weighted_percentage,
        affirmative: tier_counts.total(),
        tier_counts,
        total_indicators,
    }
}
