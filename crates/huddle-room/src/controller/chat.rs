//! Chat overlay and chat signals.

use huddle_common::{ConnectionId, RoomEvent};
use huddle_social::{ChatEntry, ChatPayload};
use tracing::{debug, warn};

use crate::error::RoomError;
use crate::ui_state::UiAction;

use super::RoomController;

impl RoomController {
    /// Open the chat overlay, or close it if open.
    pub fn toggle_chat(&mut self) {
        if self.ui.chat_open {
            self.close_chat();
        } else {
            self.dispatch_ui(UiAction::ChatOpened);
        }
    }

    pub fn close_chat(&mut self) {
        if self.ui.chat_open {
            self.dispatch_ui(UiAction::ChatClosed);
        }
    }

    /// Broadcast a chat message. The log is filled when the signal comes
    /// back from the session, so the local copy arrives like any other.
    pub async fn send_chat(&mut self, text: &str) -> Result<(), RoomError> {
        let local = self.local.as_ref().ok_or(RoomError::NotJoined)?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        let payload = ChatPayload::new(text, local.nickname.clone()).encode()?;
        self.session
            .send_signal(&self.config.chat_signal, &payload)
            .await?;
        Ok(())
    }

    pub(super) fn on_chat_signal(&mut self, from: ConnectionId, data: &str) {
        let payload = match ChatPayload::parse(data) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(from = %from.as_str(), error = %e, "Dropping chat signal");
                return;
            }
        };

        // Local participant wins when nicknames collide.
        let avatar = self
            .participants()
            .find(|p| p.nickname == payload.nickname)
            .and_then(|p| p.avatar.clone());

        debug!(from = %from.as_str(), nickname = %payload.nickname, "Chat message received");
        self.events.publish(RoomEvent::ChatMessage {
            from: payload.nickname.clone(),
            text: payload.message.clone(),
        });
        self.chat.push(ChatEntry::new(
            from.as_str(),
            payload.nickname,
            payload.message,
            avatar,
        ));
        self.dispatch_ui(UiAction::ChatReceived);
    }
}
