//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Huddle Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Ratios are height / width.

[layout]
# min_ratio = 0.5625       # widest tile (16:9)
# max_ratio = 1.5          # narrowest tile (2:3)
# fixed_ratio = false
# big_percentage = 0.82    # 0.1-0.95
# big_fixed_ratio = false
# big_min_ratio = 0.5625
# big_max_ratio = 1.5
# big_first = false        # true puts the enlarged tile top-left
# animate = true
# animation_ms = 200       # 0-2000

[room]
# debounce_ms = 20         # 0-1000
# nickname_prefix = "OpenVidu_User"
# request_permissions = false
# chat_signal = "chat"

[room.publisher]
# resolution = "640x480"
# frame_rate = 30          # 1-60
# publish_audio = true
# publish_video = true

[token_service]
url = "https://localhost:4443"
# secret = "MY_SECRET"
# connect_timeout_secs = 10
# request_timeout_secs = 30

[logging]
# level = "INFO"           # TRACE, DEBUG, INFO, WARNING, ERROR
# with_target = true
# ansi = true
"##
}
