//! In-memory TileSurface that records the latest rect of every tile.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use huddle_common::types::{Rect, TileId};

use super::{Result, SurfaceError, TileSurface};

#[derive(Debug, Default)]
struct Frames {
    rects: HashMap<TileId, Rect>,
    writes: usize,
}

/// Shared recording surface. Clones see the same state, so a host can keep
/// one handle while the room owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    inner: Arc<Mutex<Frames>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&self, id: TileId) -> Option<Rect> {
        self.inner.lock().ok()?.rects.get(&id).copied()
    }

    pub fn tile_count(&self) -> usize {
        self.inner.lock().map(|f| f.rects.len()).unwrap_or(0)
    }

    /// Total number of `place` calls so far.
    pub fn writes(&self) -> usize {
        self.inner.lock().map(|f| f.writes).unwrap_or(0)
    }
}

impl TileSurface for MemorySurface {
    fn place(&mut self, id: TileId, rect: Rect) -> Result<()> {
        let mut frames = self
            .inner
            .lock()
            .map_err(|e| SurfaceError::Detached(e.to_string()))?;
        frames.rects.insert(id, rect);
        frames.writes += 1;
        Ok(())
    }

    fn remove(&mut self, id: TileId) -> Result<()> {
        let mut frames = self
            .inner
            .lock()
            .map_err(|e| SurfaceError::Detached(e.to_string()))?;
        frames
            .rects
            .remove(&id)
            .map(|_| ())
            .ok_or(SurfaceError::UnknownTile(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_latest_rect() {
        let mut surface = MemorySurface::new();
        surface.place(TileId(1), Rect::sized(10.0, 10.0)).unwrap();
        surface.place(TileId(1), Rect::sized(20.0, 20.0)).unwrap();
        assert_eq!(surface.rect(TileId(1)), Some(Rect::sized(20.0, 20.0)));
        assert_eq!(surface.writes(), 2);
        assert_eq!(surface.tile_count(), 1);
    }

    #[test]
    fn clones_share_state() {
        let mut surface = MemorySurface::new();
        let view = surface.clone();
        surface.place(TileId(4), Rect::sized(5.0, 5.0)).unwrap();
        assert_eq!(view.rect(TileId(4)), Some(Rect::sized(5.0, 5.0)));
    }

    #[test]
    fn remove_unknown_is_an_error() {
        let mut surface = MemorySurface::new();
        assert_eq!(
            surface.remove(TileId(2)),
            Err(SurfaceError::UnknownTile(TileId(2)))
        );
    }

    #[test]
    fn remove_forgets_tile() {
        let mut surface = MemorySurface::new();
        surface.place(TileId(1), Rect::sized(1.0, 1.0)).unwrap();
        surface.remove(TileId(1)).unwrap();
        assert!(surface.rect(TileId(1)).is_none());
        assert_eq!(surface.tile_count(), 0);
    }
}
