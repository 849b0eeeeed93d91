//! Joining and leaving the room.

use huddle_common::{Notification, RoomEvent, RoomId, RoomPhase, SessionError};
use huddle_social::{client_data, guest_nickname};
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::error::RoomError;
use crate::participant::Participant;
use crate::session::PublisherSettings;
use crate::ui_state::UiAction;

use super::RoomController;

impl RoomController {
    /// Fetch a token, connect, and publish the local camera.
    ///
    /// A blank `display_name` gets a generated guest nickname. Token or
    /// connect failure raises one modal alert and leaves the room idle;
    /// nothing is retried.
    pub async fn join(&mut self, room_name: &str, display_name: Option<&str>) -> Result<(), RoomError> {
        if matches!(self.phase, RoomPhase::Joining | RoomPhase::Joined) {
            return Err(RoomError::AlreadyJoined);
        }
        let room = RoomId::parse(room_name).ok_or_else(|| RoomError::InvalidRoom(room_name.to_string()))?;
        let nickname = match display_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => guest_nickname(&self.config.nickname_prefix),
        };

        self.phase = RoomPhase::Joining;
        info!(room = %room, nickname = %nickname, "Joining room");

        let token = match self.tokens.get_token(room.as_str()).await {
            Ok(token) => token,
            Err(e) => return Err(self.fail_connection(e)),
        };
        let info = match self.session.connect(&token, &client_data(&nickname)).await {
            Ok(info) => info,
            Err(e) => return Err(self.fail_connection(e)),
        };

        if let Err(e) = self.check_permissions().await {
            self.session.disconnect().await;
            self.phase = RoomPhase::Idle;
            return Err(e);
        }

        let tile = self.tiles.add(None);
        let mut local = Participant::local(nickname, info.connection_id.clone(), tile);
        local.audio_active = self.config.publisher.publish_audio;
        local.video_active = self.config.publisher.publish_video;

        if self.session.can_publish() {
            let settings = PublisherSettings::from_config(&self.config.publisher);
            match self.session.publish(&settings).await {
                Ok(handle) => {
                    local.handle = Some(handle);
                    local.avatar = self.session.snapshot(handle);
                }
                Err(e) => warn!(error = %e, "Failed to publish local stream"),
            }
        } else {
            info!("Connection may not publish, joining as viewer");
        }

        self.dispatch_ui(UiAction::MicChanged(local.audio_active));
        self.dispatch_ui(UiAction::CamChanged(local.video_active));
        self.local = Some(local);
        self.room_id = Some(room.clone());
        self.phase = RoomPhase::Joined;
        self.events.publish(RoomEvent::Joined {
            room_id: room.to_string(),
            connection_id: info.connection_id.as_str().to_string(),
        });
        self.schedule_layout();
        Ok(())
    }

    /// Disconnect and drop all room state. Safe to call more than once.
    pub async fn leave_room(&mut self) {
        self.debounce.cancel();
        if matches!(self.phase, RoomPhase::Joining | RoomPhase::Joined) {
            self.session.disconnect().await;
        }

        self.applier
            .apply(&[], Instant::now().into_std(), self.surface.as_mut());
        self.applier.clear();
        self.tiles.clear();
        self.local = None;
        self.remotes.clear();
        self.chat.clear();
        self.dispatch_ui(UiAction::Reset);

        if self.phase != RoomPhase::Left {
            info!(room = ?self.room_id.as_ref().map(|r| r.as_str()), "Left room");
            self.events.publish(RoomEvent::Left);
        }
        self.room_id = None;
        self.phase = RoomPhase::Left;
    }

    fn fail_connection(&mut self, err: SessionError) -> RoomError {
        error!(error = %err, "Could not connect to the session");
        self.notifications
            .push(Notification::connection_failure(err.message()));
        self.events
            .publish(RoomEvent::Notification(err.message().to_string()));
        self.phase = RoomPhase::Idle;
        RoomError::Session(err)
    }

    async fn check_permissions(&mut self) -> Result<(), RoomError> {
        if !self.config.request_permissions {
            return Ok(());
        }
        let Some(checker) = self.permissions.as_mut() else {
            warn!("Permission check requested but no checker is installed");
            return Ok(());
        };

        let report = checker.check().await.map_err(|e| {
            error!(error = %e, "Permission check failed");
            RoomError::Session(e)
        })?;
        if report.all_granted() {
            return Ok(());
        }

        error!(%report, "Permissions denied");
        self.notifications.push(Notification::alert(
            "Error occurred!",
            "Permissions denied",
            report.to_string(),
        ));
        Err(RoomError::PermissionDenied(report))
    }
}
