//! Fakes for the SDK seams, shared by the controller and runtime tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use huddle_common::{ConnectionId, SessionError};

use crate::permissions::{PermissionChecker, PermissionReport};
use crate::session::{ConnectionInfo, MediaHandle, MediaSession, PublisherSettings, VideoDevice};
use crate::token::TokenProvider;

#[derive(Debug)]
pub struct FakeState {
    pub connect_error: Option<String>,
    pub publish_allowed: bool,
    pub broken_sources: Vec<String>,
    pub subscribe_error: bool,
    pub connected: bool,
    pub disconnects: usize,
    pub next_handle: u64,
    pub published: Vec<PublisherSettings>,
    pub unpublished: Vec<MediaHandle>,
    pub subscribed: Vec<String>,
    pub audio: HashMap<MediaHandle, bool>,
    pub video: HashMap<MediaHandle, bool>,
    pub devices: Vec<VideoDevice>,
    pub signals: Vec<(String, String)>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            connect_error: None,
            publish_allowed: true,
            broken_sources: Vec::new(),
            subscribe_error: false,
            connected: false,
            disconnects: 0,
            next_handle: 1,
            published: Vec::new(),
            unpublished: Vec::new(),
            subscribed: Vec::new(),
            audio: HashMap::new(),
            video: HashMap::new(),
            devices: Vec::new(),
            signals: Vec::new(),
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeSession {
    pub state: Arc<Mutex<FakeState>>,
}

impl FakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut FakeState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    fn next_handle(state: &mut FakeState) -> MediaHandle {
        let handle = MediaHandle(state.next_handle);
        state.next_handle += 1;
        handle
    }
}

#[async_trait]
impl MediaSession for FakeSession {
    async fn connect(
        &mut self,
        _token: &str,
        _client_data: &str,
    ) -> Result<ConnectionInfo, SessionError> {
        self.with(|s| match &s.connect_error {
            Some(msg) => Err(SessionError::Connect(msg.clone())),
            None => {
                s.connected = true;
                Ok(ConnectionInfo {
                    connection_id: ConnectionId::new("con_local"),
                })
            }
        })
    }

    async fn disconnect(&mut self) {
        self.with(|s| {
            s.connected = false;
            s.disconnects += 1;
        });
    }

    fn can_publish(&self) -> bool {
        self.state.lock().unwrap().publish_allowed
    }

    async fn publish(&mut self, settings: &PublisherSettings) -> Result<MediaHandle, SessionError> {
        self.with(|s| {
            if let Some(source) = &settings.video_source {
                if s.broken_sources.contains(source) {
                    return Err(SessionError::Publish(format!("cannot open {source}")));
                }
            }
            s.published.push(settings.clone());
            let handle = Self::next_handle(s);
            s.audio.insert(handle, settings.publish_audio);
            s.video.insert(handle, settings.publish_video);
            Ok(handle)
        })
    }

    async fn unpublish(&mut self, handle: MediaHandle) -> Result<(), SessionError> {
        self.with(|s| s.unpublished.push(handle));
        Ok(())
    }

    async fn subscribe(&mut self, stream_id: &str) -> Result<MediaHandle, SessionError> {
        self.with(|s| {
            if s.subscribe_error {
                return Err(SessionError::Subscribe(format!("no stream {stream_id}")));
            }
            s.subscribed.push(stream_id.to_string());
            Ok(Self::next_handle(s))
        })
    }

    fn set_audio_enabled(&mut self, handle: MediaHandle, enabled: bool) -> Result<(), SessionError> {
        self.with(|s| s.audio.insert(handle, enabled));
        Ok(())
    }

    fn set_video_enabled(&mut self, handle: MediaHandle, enabled: bool) -> Result<(), SessionError> {
        self.with(|s| s.video.insert(handle, enabled));
        Ok(())
    }

    async fn video_devices(&mut self) -> Result<Vec<VideoDevice>, SessionError> {
        Ok(self.with(|s| s.devices.clone()))
    }

    async fn send_signal(&mut self, kind: &str, data: &str) -> Result<(), SessionError> {
        self.with(|s| s.signals.push((kind.to_string(), data.to_string())));
        Ok(())
    }

    fn snapshot(&self, handle: MediaHandle) -> Option<String> {
        Some(format!("data:image/png;base64,{}", handle.0))
    }
}

#[derive(Clone, Default)]
pub struct FakeTokens {
    pub error: Option<String>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl FakeTokens {
    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl TokenProvider for FakeTokens {
    async fn get_token(&self, room_id: &str) -> Result<String, SessionError> {
        self.requests.lock().unwrap().push(room_id.to_string());
        match &self.error {
            Some(msg) => Err(SessionError::Token(msg.clone())),
            None => Ok(format!("tok_{room_id}")),
        }
    }
}

pub struct FakePermissions(pub PermissionReport);

#[async_trait]
impl PermissionChecker for FakePermissions {
    async fn check(&mut self) -> Result<PermissionReport, SessionError> {
        Ok(self.0)
    }
}

pub fn device(id: &str) -> VideoDevice {
    VideoDevice {
        device_id: id.to_string(),
        label: format!("Camera {id}"),
    }
}
