//! Tile layout configuration types.

use serde::{Deserialize, Serialize};

/// Tile layout configuration.
///
/// Ratios are height / width: `min_ratio` is the widest shape a tile may
/// take, `max_ratio` the narrowest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Widest ratio for regular tiles (valid range: 0.1-10.0).
    pub min_ratio: f64,
    /// Narrowest ratio for regular tiles (valid range: 0.1-10.0, >= min_ratio).
    pub max_ratio: f64,
    /// Keep each tile's intrinsic ratio and ignore min/max.
    pub fixed_ratio: bool,
    /// Share of the container given to the enlarged tile (valid range: 0.1-0.95).
    pub big_percentage: f64,
    /// Keep the enlarged tile's intrinsic ratio.
    pub big_fixed_ratio: bool,
    /// Widest ratio for the enlarged tile.
    pub big_min_ratio: f64,
    /// Narrowest ratio for the enlarged tile.
    pub big_max_ratio: f64,
    /// Place the enlarged tile top-left instead of bottom-right.
    pub big_first: bool,
    /// Interpolate tile moves instead of jumping.
    pub animate: bool,
    /// Animation length in milliseconds (valid range: 0-2000).
    pub animation_ms: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_ratio: 9.0 / 16.0,
            max_ratio: 3.0 / 2.0,
            fixed_ratio: false,
            big_percentage: 0.82,
            big_fixed_ratio: false,
            big_min_ratio: 9.0 / 16.0,
            big_max_ratio: 3.0 / 2.0,
            big_first: false,
            animate: true,
            animation_ms: 200,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
