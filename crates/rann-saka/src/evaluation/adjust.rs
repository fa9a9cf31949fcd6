use super::domain::Category;
use tracing::debug;

/// Amplification base applied per tier level when a category's key indicator is affirmative.
pub const DEFAULT_BASE_FACTOR: f64 = 1.5;

/// Subtracted from the base factor when the key indicator is negative.
pub const DAMPENING_OFFSET: f64 = 0.25;

/// Which branch of the conditional adjustment a category went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Key indicator affirmative: every indicator in the category was amplified.
    Amplified,
    /// Key indicator negative: only affirmative related indicators were rescaled.
    Dampened { rescaled: usize },
}

/// Applies the tier-scaled conditional weight adjustment to one category.
///
/// With an affirmative key indicator, the key and every related indicator are multiplied by
/// `base_factor ^ tier`, whatever the related answers were. With a negative key indicator,
/// only related indicators answered affirmatively are multiplied by
/// `(base_factor - 0.25) ^ tier`; the key indicator and negative answers are untouched.
///
/// The mutation compounds: calling this twice on the same category scales weights twice.
/// A session applies it exactly once per category.
pub fn adjust_category_weights(category: &mut Category, base_factor: f64) -> Adjustment {
    let name = category.name().to_string();
    let (key, related) = category.split_key_mut();

    if key.is_affirmative() {
        key.scale(tier_factor(base_factor, key.tier().level()));
        for indicator in related.iter_mut() {
            indicator.scale(tier_factor(base_factor, indicator.tier().level()));
        }
        debug!(category = %name, base_factor, "key indicator affirmative, amplified category");
        return Adjustment::Amplified;
    }

    let dampening = base_factor - DAMPENING_OFFSET;
    let mut rescaled = 0;
    for indicator in related.iter_mut().filter(|ind| ind.is_affirmative()) {
        indicator.scale(tier_factor(dampening, indicator.tier().level()));
        rescaled += 1;
    }
    debug!(category = %name, rescaled, "key indicator negative, rescaled related answers");
    Adjustment::Dampened { rescaled }
}

fn tier_factor(base: f64, level: u8) -> f64 {
    base.powi(i32::from(level))
}
