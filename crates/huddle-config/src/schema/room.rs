//! Room session configuration: debounce, publisher defaults, token backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Room controller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// Delay before a layout recompute runs, in milliseconds (valid range: 0-1000).
    pub debounce_ms: u64,
    /// Prefix for generated nicknames when the user gives none.
    pub nickname_prefix: String,
    /// Ask the platform for camera/microphone grants before publishing.
    pub request_permissions: bool,
    /// Signal type used for chat messages.
    pub chat_signal: String,
    pub publisher: PublisherConfig,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            nickname_prefix: "OpenVidu_User".into(),
            request_permissions: false,
            chat_signal: "chat".into(),
            publisher: PublisherConfig::default(),
        }
    }
}

/// Settings for the local camera/microphone stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    /// Capture resolution as `WIDTHxHEIGHT`.
    pub resolution: String,
    /// Capture frame rate (valid range: 1-60).
    pub frame_rate: u32,
    pub publish_audio: bool,
    pub publish_video: bool,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            resolution: "640x480".into(),
            frame_rate: 30,
            publish_audio: true,
            publish_video: true,
        }
    }
}

impl PublisherConfig {
    /// Parse `resolution` into `(width, height)`.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        let (w, h) = self.resolution.split_once('x')?;
        let w = w.trim().parse::<u32>().ok()?;
        let h = h.trim().parse::<u32>().ok()?;
        if w == 0 || h == 0 {
            return None;
        }
        Some((w, h))
    }
}

/// Backend that issues session tokens.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenServiceConfig {
    /// Base URL of the media server, e.g. `https://localhost:4443`.
    pub url: String,
    /// Server secret for basic auth. Never serialized back out.
    #[serde(skip_serializing)]
    pub secret: String,
    /// Connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 1-120).
    pub request_timeout_secs: u32,
}

impl fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("url", &self.url)
            .field("secret", &"[REDACTED]")
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            url: "https://localhost:4443".into(),
            secret: "MY_SECRET".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_config_defaults() {
        let config = RoomConfig::default();
        assert_eq!(config.debounce_ms, 20);
        assert_eq!(config.nickname_prefix, "OpenVidu_User");
        assert!(!config.request_permissions);
        assert_eq!(config.chat_signal, "chat");
        assert_eq!(config.publisher.frame_rate, 30);
        assert!(config.publisher.publish_audio);
        assert!(config.publisher.publish_video);
    }

    #[test]
    fn publisher_dimensions_parse() {
        let mut config = PublisherConfig::default();
        assert_eq!(config.dimensions(), Some((640, 480)));

        config.resolution = "1280 x 720".into();
        assert_eq!(config.dimensions(), Some((1280, 720)));

        config.resolution = "hd".into();
        assert_eq!(config.dimensions(), None);

        config.resolution = "0x480".into();
        assert_eq!(config.dimensions(), None);
    }

    #[test]
    fn token_service_debug_redacts_secret() {
        let config = TokenServiceConfig {
            secret: "hunter2".into(),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn token_service_secret_is_read_but_not_written() {
        let toml_str = r#"
url = "https://media.example.com"
secret = "s3cret"
"#;
        let config: TokenServiceConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.url, "https://media.example.com");

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("s3cret"));
    }
}
