//! Add, remove, and enlarge operations on the TileManager.

use huddle_common::types::TileId;

use crate::tile::Tile;

use super::TileManager;

impl TileManager {
    /// Append a tile. `ratio` is its video height / width, if known.
    pub fn add(&mut self, ratio: Option<f64>) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        self.tiles.push(Tile {
            id,
            intrinsic_ratio: ratio,
            big: false,
        });
        id
    }

    /// Drop a tile. Removing the big tile leaves no tile enlarged.
    pub fn remove(&mut self, id: TileId) -> bool {
        let before = self.tiles.len();
        self.tiles.retain(|t| t.id != id);
        if self.big == Some(id) {
            self.big = None;
        }
        self.tiles.len() != before
    }

    /// Enlarge `id`, shrinking whichever tile was big before.
    pub fn set_big(&mut self, id: TileId) -> bool {
        if !self.contains(id) {
            return false;
        }
        for tile in &mut self.tiles {
            tile.big = tile.id == id;
        }
        self.big = Some(id);
        true
    }

    /// Shrink the big tile. Returns `false` when nothing was enlarged.
    pub fn clear_big(&mut self) -> bool {
        if self.big.take().is_none() {
            return false;
        }
        for tile in &mut self.tiles {
            tile.big = false;
        }
        true
    }

    /// Enlarge `id`, or shrink it if it is already big.
    pub fn toggle_big(&mut self, id: TileId) -> bool {
        if self.big == Some(id) {
            self.clear_big()
        } else {
            self.set_big(id)
        }
    }

    /// Record a tile's video ratio once its first frame arrives.
    pub fn set_ratio(&mut self, id: TileId, ratio: f64) -> bool {
        match self.tiles.iter_mut().find(|t| t.id == id) {
            Some(tile) => {
                tile.intrinsic_ratio = Some(ratio);
                true
            }
            None => false,
        }
    }

    /// Remove every tile. Ids keep counting up.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.big = None;
    }
}
