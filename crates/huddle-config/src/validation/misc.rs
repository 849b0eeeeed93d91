//! Validation for the room, publisher, and token service sections.

use crate::schema::HuddleConfig;

use super::helpers::{validate_range, validate_range_u64};

/// Validate room controller constraints.
pub(crate) fn validate_room(errors: &mut Vec<String>, config: &HuddleConfig) {
    validate_range_u64(errors, "room.debounce_ms", config.room.debounce_ms, 0, 1000);
    if config.room.chat_signal.trim().is_empty() {
        errors.push("room.chat_signal must not be empty".into());
    }
}

/// Validate publisher constraints.
pub(crate) fn validate_publisher(errors: &mut Vec<String>, config: &HuddleConfig) {
    let publisher = &config.room.publisher;
    validate_range(
        errors,
        "room.publisher.frame_rate",
        publisher.frame_rate,
        1,
        60,
    );
    if publisher.dimensions().is_none() {
        errors.push(format!(
            "room.publisher.resolution = {:?} is not WIDTHxHEIGHT",
            publisher.resolution
        ));
    }
}

/// Validate token service constraints.
pub(crate) fn validate_token_service(errors: &mut Vec<String>, config: &HuddleConfig) {
    let service = &config.token_service;
    if !(service.url.starts_with("http://") || service.url.starts_with("https://")) {
        errors.push(format!(
            "token_service.url = {:?} must start with http:// or https://",
            service.url
        ));
    }
    validate_range(
        errors,
        "token_service.connect_timeout_secs",
        service.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "token_service.request_timeout_secs",
        service.request_timeout_secs,
        1,
        120,
    );
}
