//! No-op TileSurface implementation.
//!
//! Used when nothing renders the tiles, e.g. headless runs.

use huddle_common::types::{Rect, TileId};

use super::{Result, TileSurface};

/// Accepts every placement and drops it.
pub struct NoopSurface;

impl TileSurface for NoopSurface {
    fn place(&mut self, _id: TileId, _rect: Rect) -> Result<()> {
        Ok(())
    }

    fn remove(&mut self, _id: TileId) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_succeeds() {
        let mut surface = NoopSurface;
        assert!(surface.place(TileId(1), Rect::sized(100.0, 100.0)).is_ok());
    }

    #[test]
    fn remove_succeeds() {
        let mut surface = NoopSurface;
        assert!(surface.remove(TileId(1)).is_ok());
    }
}
