use super::catalog::Catalog;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const JITTER_MIN: f64 = 0.9;
pub const JITTER_MAX: f64 = 1.1;

/// Multiplies every indicator weight by an independent factor drawn uniformly from
/// `[JITTER_MIN, JITTER_MAX]`. Runs after all category adjustments and before aggregation.
pub fn apply_jitter<R: Rng + ?Sized>(catalog: &mut Catalog, rng: &mut R) {
    for category in catalog.categories_mut() {
        for indicator in category.indicators_mut() {
            let factor = rng.gen_range(JITTER_MIN..=JITTER_MAX);
            indicator.scale(factor);
        }
    }
}

/// Random source for the jitter pass. A fixed seed makes runs reproducible.
pub fn session_rng(seed: Option<u64>) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.unwrap_or_else(rand::random))
}
