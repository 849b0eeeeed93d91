//! Seam to the media-session SDK.
//!
//! The SDK owns transport, signaling, and peer negotiation. The room only
//! sees opaque [`MediaHandle`]s and the events below.

use async_trait::async_trait;
use huddle_common::{ConnectionId, SessionError};
use huddle_config::schema::PublisherConfig;

/// Opaque reference to a published or subscribed stream inside the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaHandle(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDevice {
    pub device_id: String,
    pub label: String,
}

/// Options for the local camera/microphone stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherSettings {
    /// `None` lets the SDK pick its default device.
    pub video_source: Option<String>,
    pub publish_audio: bool,
    pub publish_video: bool,
    pub resolution: String,
    pub frame_rate: u32,
}

impl PublisherSettings {
    pub fn from_config(config: &PublisherConfig) -> Self {
        Self {
            video_source: None,
            publish_audio: config.publish_audio,
            publish_video: config.publish_video,
            resolution: config.resolution.clone(),
            frame_rate: config.frame_rate,
        }
    }
}

/// Events the SDK delivers while connected.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A remote stream appeared. `connection_data` is the raw data string
    /// of the publishing connection.
    ParticipantJoined {
        stream_id: String,
        connection_id: ConnectionId,
        connection_data: String,
    },
    ParticipantLeft {
        connection_id: ConnectionId,
    },
    /// First frames are playing. `frame` is the video size once known.
    TrackPlaying {
        handle: MediaHandle,
        frame: Option<(u32, u32)>,
    },
    ChatSignal {
        from: ConnectionId,
        data: String,
    },
}

#[async_trait]
pub trait MediaSession: Send {
    async fn connect(&mut self, token: &str, client_data: &str)
        -> Result<ConnectionInfo, SessionError>;

    async fn disconnect(&mut self);

    /// Whether this connection's role may publish.
    fn can_publish(&self) -> bool;

    async fn publish(&mut self, settings: &PublisherSettings) -> Result<MediaHandle, SessionError>;

    async fn unpublish(&mut self, handle: MediaHandle) -> Result<(), SessionError>;

    async fn subscribe(&mut self, stream_id: &str) -> Result<MediaHandle, SessionError>;

    fn set_audio_enabled(&mut self, handle: MediaHandle, enabled: bool)
        -> Result<(), SessionError>;

    fn set_video_enabled(&mut self, handle: MediaHandle, enabled: bool)
        -> Result<(), SessionError>;

    async fn video_devices(&mut self) -> Result<Vec<VideoDevice>, SessionError>;

    async fn send_signal(&mut self, kind: &str, data: &str) -> Result<(), SessionError>;

    /// A still frame of the stream as an image data URL, if one can be taken.
    fn snapshot(&self, handle: MediaHandle) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publisher_settings_follow_config() {
        let config = PublisherConfig {
            resolution: "1280x720".into(),
            frame_rate: 24,
            publish_audio: false,
            publish_video: true,
        };
        let settings = PublisherSettings::from_config(&config);
        assert_eq!(settings.resolution, "1280x720");
        assert_eq!(settings.frame_rate, 24);
        assert!(!settings.publish_audio);
        assert!(settings.publish_video);
        assert!(settings.video_source.is_none());
    }
}
