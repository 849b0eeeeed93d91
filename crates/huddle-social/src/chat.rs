//! Chat log for the room overlay.
//!
//! Append-only and scoped to one room: entries stay in arrival order and
//! are only dropped when the room is left.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single received chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub id: String,
    /// Connection that sent the signal.
    pub connection_id: String,
    pub nickname: String,
    pub text: String,
    /// Sender's avatar snapshot, when one was taken.
    pub avatar: Option<String>,
    /// RFC 3339 arrival time.
    pub received_at: String,
}

impl ChatEntry {
    pub fn new(
        connection_id: impl Into<String>,
        nickname: impl Into<String>,
        text: impl Into<String>,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id: huddle_common::new_id(),
            connection_id: connection_id.into(),
            nickname: nickname.into(),
            text: text.into(),
            avatar,
            received_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
