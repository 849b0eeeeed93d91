use serde::Serialize;
use tokio::sync::broadcast;

use crate::types::TileId;

/// Room-level events published by the controller for UI observers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum RoomEvent {
    Joined { room_id: String, connection_id: String },
    ParticipantJoined { connection_id: String, nickname: String },
    ParticipantLeft { connection_id: String },
    EnlargedChanged(Option<TileId>),
    LayoutUpdated { tiles: usize },
    ChatMessage { from: String, text: String },
    Notification(String),
    Left,
}

pub struct EventBus {
    sender: broadcast::Sender<RoomEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RoomEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: RoomEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
