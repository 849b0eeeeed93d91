//! Session token acquisition.
//!
//! The room asks a [`TokenProvider`] for a token before connecting.
//! [`HttpTokenService`] talks to an OpenVidu-style media server directly.

use std::time::Duration;

use async_trait::async_trait;
use huddle_common::SessionError;
use huddle_config::schema::TokenServiceConfig;
use reqwest::StatusCode;
use tracing::debug;

/// User name for the server's basic auth.
const SERVER_USER: &str = "OPENVIDUAPP";

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn get_token(&self, room_id: &str) -> Result<String, SessionError>;
}

/// Creates the session (if needed) and a connection token over HTTP.
pub struct HttpTokenService {
    base_url: String,
    secret: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for HttpTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTokenService")
            .field("base_url", &self.base_url)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl HttpTokenService {
    pub fn new(config: &TokenServiceConfig) -> Result<Self, SessionError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs.into()))
            .timeout(Duration::from_secs(config.request_timeout_secs.into()))
            .build()
            .map_err(|e| SessionError::Token(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            secret: config.secret.clone(),
            http,
        })
    }

    pub(crate) fn sessions_url(&self) -> String {
        format!("{}/openvidu/api/sessions", self.base_url)
    }

    pub(crate) fn connection_url(&self, session_id: &str) -> String {
        format!("{}/{}/connection", self.sessions_url(), session_id)
    }

    /// Create the session, or reuse it if the server already has one with
    /// this id. Returns the session id.
    async fn create_session(&self, room_id: &str) -> Result<String, SessionError> {
        let response = self
            .http
            .post(self.sessions_url())
            .basic_auth(SERVER_USER, Some(&self.secret))
            .json(&serde_json::json!({ "customSessionId": room_id }))
            .send()
            .await
            .map_err(|e| SessionError::Token(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            debug!(room = %room_id, "Session already exists");
            return Ok(room_id.to_string());
        }
        if !status.is_success() {
            return Err(SessionError::Token(format!(
                "session request failed with status {status}"
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SessionError::Token(e.to_string()))?;
        Ok(session_id_from(&body).unwrap_or_else(|| room_id.to_string()))
    }

    async fn create_connection(&self, session_id: &str) -> Result<String, SessionError> {
        let response = self
            .http
            .post(self.connection_url(session_id))
            .basic_auth(SERVER_USER, Some(&self.secret))
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| SessionError::Token(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::Token(format!(
                "connection request failed with status {status}"
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SessionError::Token(e.to_string()))?;
        token_from(&body)
            .ok_or_else(|| SessionError::Token("response carried no token".into()))
    }
}

#[async_trait]
impl TokenProvider for HttpTokenService {
    async fn get_token(&self, room_id: &str) -> Result<String, SessionError> {
        let session_id = self.create_session(room_id).await?;
        let token = self.create_connection(&session_id).await?;
        debug!(session = %session_id, "Token issued");
        Ok(token)
    }
}

fn session_id_from(body: &serde_json::Value) -> Option<String> {
    body.get("id")?.as_str().map(str::to_string)
}

fn token_from(body: &serde_json::Value) -> Option<String> {
    body.get("token")?
        .as_str()
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
