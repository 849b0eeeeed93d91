use huddle_common::types::{Rect, TileId};
use serde::{Deserialize, Serialize};

use crate::layout::DEFAULT_TILE_RATIO;

/// One video tile as the layout engine sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    /// Intrinsic height / width of the video, once known.
    pub intrinsic_ratio: Option<f64>,
    pub big: bool,
}

impl Tile {
    pub fn new(id: TileId) -> Self {
        Self {
            id,
            intrinsic_ratio: None,
            big: false,
        }
    }

    pub fn with_ratio(id: TileId, ratio: f64) -> Self {
        Self {
            id,
            intrinsic_ratio: Some(ratio),
            big: false,
        }
    }

    pub fn big(mut self) -> Self {
        self.big = true;
        self
    }

    /// The intrinsic ratio, or the 640x480 default when unknown or degenerate.
    pub fn ratio(&self) -> f64 {
        match self.intrinsic_ratio {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => DEFAULT_TILE_RATIO,
        }
    }

    /// Ratio of a video frame size, if both sides are positive.
    pub fn ratio_of(frame: Rect) -> Option<f64> {
        if frame.width > 0.0 && frame.height > 0.0 {
            Some(frame.height / frame.width)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ratio_defaults_to_four_by_three() {
        let tile = Tile::new(TileId(1));
        assert!((tile.ratio() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn degenerate_ratio_falls_back() {
        let tile = Tile::with_ratio(TileId(1), 0.0);
        assert!((tile.ratio() - 0.75).abs() < f64::EPSILON);
        let tile = Tile::with_ratio(TileId(1), f64::NAN);
        assert!((tile.ratio() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_of_frame() {
        assert_eq!(Tile::ratio_of(Rect::sized(1280.0, 720.0)), Some(0.5625));
        assert_eq!(Tile::ratio_of(Rect::sized(0.0, 720.0)), None);
    }

    #[test]
    fn big_builder_sets_flag() {
        let tile = Tile::with_ratio(TileId(3), 0.5625).big();
        assert!(tile.big);
        assert_eq!(tile.id, TileId(3));
    }
}
