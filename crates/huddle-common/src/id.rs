use serde::{Deserialize, Serialize};
use std::fmt;

/// Fresh v4 UUID string, used for chat entry ids.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Name of the room (custom session id on the media server).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Trims surrounding whitespace. Returns `None` for blank names.
    pub fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_distinct_v4() {
        let a = new_id();
        assert_eq!(uuid::Uuid::parse_str(&a).unwrap().get_version_num(), 4);
        assert_ne!(a, new_id());
    }

    #[test]
    fn room_id_trims() {
        let room = RoomId::parse("  daily-standup ").unwrap();
        assert_eq!(room.as_str(), "daily-standup");
        assert_eq!(room.to_string(), "daily-standup");
    }

    #[test]
    fn room_id_rejects_blank() {
        assert!(RoomId::parse("").is_none());
        assert!(RoomId::parse("   ").is_none());
    }

    #[test]
    fn room_id_serialization() {
        let room = RoomId::parse("ops").unwrap();
        let json = serde_json::to_string(&room).unwrap();
        let back: RoomId = serde_json::from_str(&json).unwrap();
        assert_eq!(room, back);
    }
}
