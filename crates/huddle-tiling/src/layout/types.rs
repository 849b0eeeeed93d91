//! Layout engine types and configuration.

use huddle_common::types::{Rect, TileId};
use serde::{Deserialize, Serialize};

/// Ratio assumed for a tile whose video size is not known yet (640x480).
pub const DEFAULT_TILE_RATIO: f64 = 3.0 / 4.0;

/// Slack, in pixels, allowed when checking a floored cell against its bounds.
pub const PIXEL_TOLERANCE: f64 = 1.0;

/// Inclusive height / width bounds for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioBounds {
    pub min: f64,
    pub max: f64,
}

impl RatioBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both bounds collapse to one ratio.
    pub fn fixed(ratio: f64) -> Self {
        Self {
            min: ratio,
            max: ratio,
        }
    }

    /// True when a `width` x `height` cell fits the bounds, allowing for
    /// the one-pixel rounding the engine applies.
    pub fn admits(&self, width: f64, height: f64) -> bool {
        height >= width * self.min - PIXEL_TOLERANCE && height <= width * self.max + PIXEL_TOLERANCE
    }
}

/// Tile layout options, fixed for the lifetime of a room session.
///
/// All ratios are height / width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub min_ratio: f64,
    pub max_ratio: f64,
    pub fixed_ratio: bool,
    pub big_percentage: f64,
    pub big_fixed_ratio: bool,
    pub big_min_ratio: f64,
    pub big_max_ratio: f64,
    pub big_first: bool,
    pub animate: bool,
}

impl Default for LayoutOptions {
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
        }
    }
}

impl LayoutOptions {
    /// Bounds for regular tiles. `first_ratio` is used when ratios are fixed.
    pub fn small_bounds(&self, first_ratio: f64) -> RatioBounds {
        if self.fixed_ratio {
            RatioBounds::fixed(first_ratio)
        } else {
            RatioBounds::new(self.min_ratio, self.max_ratio)
        }
    }

    /// Bounds for the enlarged tile.
    pub fn big_bounds(&self, big_ratio: f64) -> RatioBounds {
        if self.big_fixed_ratio {
            RatioBounds::fixed(big_ratio)
        } else {
            RatioBounds::new(self.big_min_ratio, self.big_max_ratio)
        }
    }
}

/// Final position of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: TileId,
    pub rect: Rect,
}

/// Pure layout computation with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    pub options: LayoutOptions,
}

impl LayoutEngine {
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }
}
