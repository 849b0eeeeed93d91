//! Payloads carried inside session signals.
//!
//! The transport envelope belongs to the media SDK; these are only the
//! JSON bodies this crate reads and writes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Body of a `chat` signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub message: String,
    pub nickname: String,
}

impl ChatPayload {
    pub fn new(message: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            nickname: nickname.into(),
        }
    }

    pub fn parse(data: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn encode(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_chat_payload() {
        let payload = ChatPayload::parse(r#"{"message":"hi all","nickname":"Guest42"}"#).unwrap();
        assert_eq!(payload.message, "hi all");
        assert_eq!(payload.nickname, "Guest42");
    }

    #[test]
    fn encode_uses_wire_field_names() {
        let json = ChatPayload::new("hello", "ana").encode().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["message"], "hello");
        assert_eq!(value["nickname"], "ana");
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err = ChatPayload::parse("not json").unwrap_err();
        assert!(err.to_string().starts_with("malformed payload"));
        assert!(ChatPayload::parse(r#"{"message":"no nickname"}"#).is_err());
    }
}
