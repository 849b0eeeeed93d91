//! Core types and constructors for TileManager.

use huddle_common::types::TileId;

use crate::layout::{LayoutEngine, LayoutOptions};
use crate::tile::Tile;

/// Owns the ordered tile list and which tile, if any, is enlarged.
///
/// Order is insertion order and is the order tiles fill the grid.
pub struct TileManager {
    pub(super) tiles: Vec<Tile>,
    /// At most one tile is big at a time.
    pub(super) big: Option<TileId>,
    pub(super) engine: LayoutEngine,
    pub(super) next_id: u32,
}

impl TileManager {
    pub fn new() -> Self {
        Self::with_options(LayoutOptions::default())
    }

    pub fn with_options(options: LayoutOptions) -> Self {
        Self {
            tiles: Vec::new(),
            big: None,
            engine: LayoutEngine::new(options),
            next_id: 1,
        }
    }

    // -- Accessors --

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.tile(id).is_some()
    }

    pub fn big_id(&self) -> Option<TileId> {
        self.big
    }

    pub fn has_big(&self) -> bool {
        self.big.is_some()
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.engine.options
    }
}

impl Default for TileManager {
    fn default() -> Self {
        Self::new()
    }
}
