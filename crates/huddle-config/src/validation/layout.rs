//! Layout configuration validation (ratios, big share, animation).

use crate::schema::HuddleConfig;

use super::helpers::{validate_ordered, validate_range, validate_range_f64};

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &HuddleConfig) {
    let layout = &config.layout;
    validate_range_f64(errors, "layout.min_ratio", layout.min_ratio, 0.1, 10.0);
    validate_range_f64(errors, "layout.max_ratio", layout.max_ratio, 0.1, 10.0);
    validate_ordered(
        errors,
        "layout.min_ratio",
        layout.min_ratio,
        "layout.max_ratio",
        layout.max_ratio,
    );
    validate_range_f64(
        errors,
        "layout.big_percentage",
        layout.big_percentage,
        0.1,
        0.95,
    );
    validate_range_f64(
        errors,
        "layout.big_min_ratio",
        layout.big_min_ratio,
        0.1,
        10.0,
    );
    validate_range_f64(
        errors,
        "layout.big_max_ratio",
        layout.big_max_ratio,
        0.1,
        10.0,
    );
    validate_ordered(
        errors,
        "layout.big_min_ratio",
        layout.big_min_ratio,
        "layout.big_max_ratio",
        layout.big_max_ratio,
    );
    validate_range(errors, "layout.animation_ms", layout.animation_ms, 0, 2000);
}
