//! Session event handling.

use huddle_common::{ConnectionId, RoomEvent, RoomPhase};
use huddle_social::parse_nickname;
use huddle_tiling::Tile;
use tracing::{debug, info, warn};

use crate::participant::Participant;
use crate::session::{MediaHandle, SessionEvent};
use crate::ui_state::UiAction;

use super::RoomController;

impl RoomController {
    /// Apply one event from the media session.
    ///
    /// Events arriving outside a joined room are dropped. Failures are
    /// logged and swallowed.
    pub async fn handle_session_event(&mut self, event: SessionEvent) {
        if self.phase != RoomPhase::Joined {
            debug!(?event, "Ignoring session event outside a joined room");
            return;
        }
        match event {
            SessionEvent::ParticipantJoined {
                stream_id,
                connection_id,
                connection_data,
            } => {
                self.on_participant_joined(&stream_id, connection_id, &connection_data)
                    .await
            }
            SessionEvent::ParticipantLeft { connection_id } => {
                self.on_participant_left(&connection_id)
            }
            SessionEvent::TrackPlaying { handle, frame } => self.on_track_playing(handle, frame),
            SessionEvent::ChatSignal { from, data } => self.on_chat_signal(from, &data),
        }
    }

    async fn on_participant_joined(
        &mut self,
        stream_id: &str,
        connection_id: ConnectionId,
        connection_data: &str,
    ) {
        let handle = match self.session.subscribe(stream_id).await {
            Ok(handle) => handle,
            Err(e) => {
                warn!(stream = %stream_id, error = %e, "Failed to subscribe");
                return;
            }
        };

        let nickname = parse_nickname(connection_data);
        let tile = self.tiles.add(None);
        let mut participant = Participant::remote(nickname, connection_id, handle, tile);
        participant.avatar = self.session.snapshot(handle);

        info!(
            connection = %participant.connection_id.as_str(),
            nickname = %participant.nickname,
            tile = %tile,
            "Participant joined"
        );
        self.events.publish(RoomEvent::ParticipantJoined {
            connection_id: participant.connection_id.as_str().to_string(),
            nickname: participant.nickname.clone(),
        });
        self.remotes.push(participant);
        self.dispatch_ui(UiAction::HideButtons);
        self.schedule_layout();
    }

    fn on_participant_left(&mut self, connection_id: &ConnectionId) {
        let Some(index) = self
            .remotes
            .iter()
            .position(|p| &p.connection_id == connection_id)
        else {
            debug!(connection = %connection_id.as_str(), "Unknown participant left");
            return;
        };

        let participant = self.remotes.remove(index);
        self.tiles.remove(participant.tile);
        info!(
            connection = %connection_id.as_str(),
            nickname = %participant.nickname,
            "Participant left"
        );
        self.events.publish(RoomEvent::ParticipantLeft {
            connection_id: connection_id.as_str().to_string(),
        });
        self.schedule_layout();
    }

    fn on_track_playing(&mut self, handle: MediaHandle, frame: Option<(u32, u32)>) {
        let tile = self
            .participants()
            .find(|p| p.handle == Some(handle))
            .map(|p| p.tile);
        if let (Some(tile), Some((width, height))) = (tile, frame) {
            let size = huddle_common::Rect::sized(width.into(), height.into());
            if let Some(ratio) = Tile::ratio_of(size) {
                self.tiles.set_ratio(tile, ratio);
            }
        }
        self.schedule_layout();
    }
}
