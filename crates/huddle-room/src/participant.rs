use huddle_common::{ConnectionId, TileId};

use crate::session::MediaHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Local,
    Remote,
}

/// Someone in the call, bound to exactly one tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub nickname: String,
    pub connection_id: ConnectionId,
    pub role: Role,
    /// `None` until the stream is published or subscribed.
    pub handle: Option<MediaHandle>,
    pub tile: TileId,
    pub avatar: Option<String>,
    /// Camera in use. Local participant only.
    pub device_id: Option<String>,
    pub audio_active: bool,
    pub video_active: bool,
}

impl Participant {
    pub fn local(nickname: impl Into<String>, connection_id: ConnectionId, tile: TileId) -> Self {
        Self {
            nickname: nickname.into(),
            connection_id,
            role: Role::Local,
            handle: None,
            tile,
            avatar: None,
            device_id: None,
            audio_active: true,
            video_active: true,
        }
    }

    pub fn remote(
        nickname: impl Into<String>,
        connection_id: ConnectionId,
        handle: MediaHandle,
        tile: TileId,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            connection_id,
            role: Role::Remote,
            handle: Some(handle),
            tile,
            avatar: None,
            device_id: None,
            audio_active: true,
            video_active: true,
        }
    }

    pub fn is_local(&self) -> bool {
        self.role == Role::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_starts_unpublished() {
        let p = Participant::local("ana", ConnectionId::new("con_1"), TileId(1));
        assert!(p.is_local());
        assert!(p.handle.is_none());
        assert!(p.audio_active && p.video_active);
    }

    #[test]
    fn remote_carries_handle() {
        let p = Participant::remote("bo", ConnectionId::new("con_2"), MediaHandle(7), TileId(2));
        assert_eq!(p.role, Role::Remote);
        assert_eq!(p.handle, Some(MediaHandle(7)));
        assert!(p.device_id.is_none());
    }
}
