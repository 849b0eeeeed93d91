//! Configuration schema types for Huddle.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the room screen.

mod layout;
mod room;
mod system;

pub use layout::*;
pub use room::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Huddle.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HuddleConfig {
    pub layout: LayoutConfig,
    pub room: RoomConfig,
    pub token_service: TokenServiceConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: HuddleConfig = toml::from_str("").unwrap();
        assert!((config.layout.min_ratio - 9.0 / 16.0).abs() < f64::EPSILON);
        assert!((config.layout.max_ratio - 1.5).abs() < f64::EPSILON);
        assert!(!config.layout.fixed_ratio);
        assert!(!config.layout.big_first);
        assert!(config.layout.animate);
        assert_eq!(config.room.debounce_ms, 20);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_override_independently() {
        let toml_str = r#"
[layout]
big_percentage = 0.7
big_first = true

[room]
debounce_ms = 50

[room.publisher]
frame_rate = 15
"#;
        let config: HuddleConfig = toml::from_str(toml_str).unwrap();
        assert!((config.layout.big_percentage - 0.7).abs() < f64::EPSILON);
        assert!(config.layout.big_first);
        assert_eq!(config.room.debounce_ms, 50);
        assert_eq!(config.room.publisher.frame_rate, 15);
        // Defaults preserved
        assert_eq!(config.room.publisher.resolution, "640x480");
        assert!(config.room.publisher.publish_audio);
        assert_eq!(config.token_service.url, "https://localhost:4443");
    }
}
