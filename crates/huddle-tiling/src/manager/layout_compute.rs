//! Layout computation and command dispatch for TileManager.

use huddle_common::types::Rect;

use crate::commands::TileCommand;
use crate::layout::Placement;

use super::TileManager;

impl TileManager {
    /// Execute a tile command. Returns `true` if anything changed.
    pub fn execute(&mut self, cmd: TileCommand) -> bool {
        match cmd {
            TileCommand::Enlarge(id) => self.set_big(id),
            TileCommand::ClearEnlarged => self.clear_big(),
            TileCommand::Remove(id) => self.remove(id),
        }
    }

    /// Place every tile inside `container`, in insertion order.
    pub fn compute(&self, container: Rect) -> Vec<Placement> {
        self.engine.compute(container, &self.tiles)
    }
}
