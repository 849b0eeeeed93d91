use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by the media-session SDK or the token backend.
///
/// Every variant carries the human-readable message that ends up in the
/// user-facing alert, so keep them short.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("token error: {0}")]
    Token(String),

    #[error("connect error: {0}")]
    Connect(String),

    #[error("publish error: {0}")]
    Publish(String),

    #[error("subscribe error: {0}")]
    Subscribe(String),

    #[error("signal error: {0}")]
    Signal(String),

    #[error("device error: {0}")]
    Device(String),
}

impl SessionError {
    /// The bare message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            SessionError::Token(m)
            | SessionError::Connect(m)
            | SessionError::Publish(m)
            | SessionError::Subscribe(m)
            | SessionError::Signal(m)
            | SessionError::Device(m) => m,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HuddleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("{0}")]
    Other(String),
}
