//! Tracing subscriber setup.

use huddle_common::HuddleError;
use huddle_config::schema::LoggingConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Directive used when the configured one cannot be parsed.
pub const DEFAULT_DIRECTIVE: &str = "huddle=info";

/// The filter directive for the configured level, applied to every
/// `huddle_*` crate.
pub fn directive(config: &LoggingConfig) -> String {
    format!("huddle={}", config.level.as_filter())
}

/// Install the global fmt subscriber. `RUST_LOG` directives are kept and
/// the configured level is added on top.
pub fn init(config: &LoggingConfig) -> huddle_common::Result<()> {
    let directive: Directive = directive(config)
        .parse()
        .or_else(|_| DEFAULT_DIRECTIVE.parse())
        .map_err(|e| HuddleError::Logging(format!("invalid log directive: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_target(config.with_target)
        .with_ansi(config.ansi)
        .try_init()
        .map_err(|e| HuddleError::Logging(e.to_string()))
}
