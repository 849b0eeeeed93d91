//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = HuddleConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_min_ratio_above_max_ratio() {
    let mut config = HuddleConfig::default();
    config.layout.min_ratio = 2.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.min_ratio = 2 must not exceed layout.max_ratio"));
}

#[test]
fn catches_big_percentage_out_of_range() {
    let mut config = HuddleConfig::default();
    config.layout.big_percentage = 1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.big_percentage"));
}

#[test]
fn catches_nan_ratio() {
    let mut config = HuddleConfig::default();
    config.layout.big_max_ratio = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.big_max_ratio"));
}

#[test]
fn catches_animation_too_long() {
    let mut config = HuddleConfig::default();
    config.layout.animation_ms = 5000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.animation_ms"));
}

#[test]
fn catches_debounce_too_long() {
    let mut config = HuddleConfig::default();
    config.room.debounce_ms = 5000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("room.debounce_ms"));
}

#[test]
fn catches_empty_chat_signal() {
    let mut config = HuddleConfig::default();
    config.room.chat_signal = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("room.chat_signal"));
}

#[test]
fn catches_bad_resolution() {
    let mut config = HuddleConfig::default();
    config.room.publisher.resolution = "full-hd".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("room.publisher.resolution"));
}

#[test]
fn catches_frame_rate_out_of_range() {
    let mut config = HuddleConfig::default();
    config.room.publisher.frame_rate = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("room.publisher.frame_rate"));
}

#[test]
fn catches_token_url_without_scheme() {
    let mut config = HuddleConfig::default();
    config.token_service.url = "localhost:4443".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("token_service.url"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = HuddleConfig::default();
    config.layout.big_percentage = 0.0;
    config.room.debounce_ms = 99_999;
    config.token_service.request_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.big_percentage"));
    assert!(err.contains("room.debounce_ms"));
    assert!(err.contains("token_service.request_timeout_secs"));
}
