use super::common::*;
use crate::evaluation::{adjust_category_weights, Adjustment, DEFAULT_BASE_FACTOR};

#[test]
fn affirmative_key_amplifies_every_indicator_by_tier() {
    let mut category = answered_category(&[true, true, false]);

    let adjustment = adjust_category_weights(&mut category, DEFAULT_BASE_FACTOR);

    assert_eq!(adjustment, Adjustment::Amplified);
    let weights: Vec<f64> = category.indicators().iter().map(|i| i.weight()).collect();
    assert_close(weights[0], 4.3875);
    assert_close(weights[1], 2.25);
    // related indicators are amplified even when answered negatively
    assert_close(weights[2], 0.8 * 1.5);
}

#[test]
fn negative_key_dampens_only_affirmative_related_indicators() {
    let mut category = answered_category(&[false, false, true]);

    let adjustment = adjust_category_weights(&mut category, DEFAULT_BASE_FACTOR);

    assert_eq!(adjustment, Adjustment::Dampened { rescaled: 1 });
    let weights: Vec<f64> = category.indicators().iter().map(|i| i.weight()).collect();
    assert_eq!(weights[0], 1.3);
    assert_eq!(weights[1], 1.0);
    assert_close(weights[2], 1.0);
}

#[test]
fn all_negative_category_is_left_untouched() {
    let mut category = answered_category(&[false, false, false]);
    let before = category.clone();

    let adjustment = adjust_category_weights(&mut category, DEFAULT_BASE_FACTOR);

    assert_eq!(adjustment, Adjustment::Dampened { rescaled: 0 });
    assert_eq!(category, before);
}

#[test]
fn adjustment_is_reproducible_bit_for_bit() {
    let mut first = answered_category(&[true, false, true]);
    let mut second = answered_category(&[true, false, true]);

    adjust_category_weights(&mut first, DEFAULT_BASE_FACTOR);
    adjust_category_weights(&mut second, DEFAULT_BASE_FACTOR);

    for (a, b) in first.indicators().iter().zip(second.indicators()) {
        assert_eq!(a.weight().to_bits(), b.weight().to_bits());
    }
}

#[test]
fn applying_adjustment_twice_compounds_weights() {
    let mut once = answered_category(&[true, true, false]);
    adjust_category_weights(&mut once, DEFAULT_BASE_FACTOR);

    let mut twice = answered_category(&[true, true, false]);
    adjust_category_weights(&mut twice, DEFAULT_BASE_FACTOR);
    adjust_category_weights(&mut twice, DEFAULT_BASE_FACTOR);

    assert_ne!(once, twice);
    assert_close(twice.key().weight(), 1.3 * 1.5_f64.powi(6));
    assert!(twice.key().weight() > once.key().weight());
}

#[test]
fn tiers_survive_adjustment() {
    let mut category = answered_category(&[true, true, true]);
    let tiers: Vec<_> = category.indicators().iter().map(|i| i.tier()).collect();

    adjust_category_weights(&mut category, DEFAULT_BASE_FACTOR);

    let after: Vec<_> = category.indicators().iter().map(|i| i.tier()).collect();
    assert_eq!(tiers, after);
}
