//! Enlarging tiles.

use huddle_common::{RoomEvent, TileId};
use tracing::debug;

use crate::error::RoomError;
use crate::ui_state::UiAction;

use super::RoomController;

impl RoomController {
    /// Handle a tap on a tile.
    ///
    /// Tapping the enlarged tile only toggles the control buttons. Tapping
    /// any other tile enlarges it in place of the previous one; when no tile
    /// was enlarged yet the buttons are toggled as well.
    pub fn toggle_enlarge(&mut self, tile: TileId) -> Result<(), RoomError> {
        if !self.tiles.contains(tile) {
            return Err(RoomError::UnknownTile(tile));
        }

        match self.tiles.big_id() {
            Some(big) if big == tile => {
                self.dispatch_ui(UiAction::ToggleButtons);
            }
            previous => {
                if previous.is_none() {
                    self.dispatch_ui(UiAction::ToggleButtons);
                }
                self.tiles.set_big(tile);
                debug!(tile = %tile, "Tile enlarged");
                self.events.publish(RoomEvent::EnlargedChanged(Some(tile)));
            }
        }
        self.schedule_layout();
        Ok(())
    }

    /// Return the enlarged tile to normal size. Returns `false` if none was.
    pub fn reset_enlarged(&mut self) -> bool {
        if !self.tiles.clear_big() {
            return false;
        }
        debug!("Enlarged tile reset");
        self.events.publish(RoomEvent::EnlargedChanged(None));
        self.schedule_layout();
        true
    }
}
