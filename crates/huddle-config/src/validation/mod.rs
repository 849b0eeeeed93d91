//! Full configuration validation.
//!
//! Validates numeric ranges, ratio ordering, and URL/resolution formats.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::HuddleConfig;
use huddle_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HuddleConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);
    misc::validate_room(&mut errors, config);
    misc::validate_publisher(&mut errors, config);
    misc::validate_token_service(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
