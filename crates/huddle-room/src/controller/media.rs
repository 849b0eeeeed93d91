//! Local microphone and camera controls.

use tracing::{debug, error, info, warn};

use crate::error::RoomError;
use crate::session::PublisherSettings;
use crate::ui_state::UiAction;

use super::RoomController;

impl RoomController {
    /// Mute or unmute the local microphone. Returns the new state.
    pub fn toggle_mic(&mut self) -> Result<bool, RoomError> {
        let local = self.local.as_mut().ok_or(RoomError::NotJoined)?;
        let enabled = !local.audio_active;
        if let Some(handle) = local.handle {
            self.session.set_audio_enabled(handle, enabled)?;
        }
        local.audio_active = enabled;
        debug!(enabled, "Microphone toggled");
        self.dispatch_ui(UiAction::MicChanged(enabled));
        self.schedule_layout();
        Ok(enabled)
    }

    /// Turn the local camera on or off. Returns the new state.
    pub fn toggle_cam(&mut self) -> Result<bool, RoomError> {
        let local = self.local.as_mut().ok_or(RoomError::NotJoined)?;
        let enabled = !local.video_active;
        if let Some(handle) = local.handle {
            self.session.set_video_enabled(handle, enabled)?;
        }
        local.video_active = enabled;
        debug!(enabled, "Camera toggled");
        self.dispatch_ui(UiAction::CamChanged(enabled));
        self.schedule_layout();
        Ok(enabled)
    }

    /// Move to another camera and republish.
    ///
    /// From the last listed device this goes to the first, from anywhere
    /// else to the last. Audio and video flags carry over. No devices is a
    /// no-op.
    pub async fn switch_camera(&mut self) -> Result<(), RoomError> {
        if self.local.is_none() {
            return Err(RoomError::NotJoined);
        }
        let devices = self.session.video_devices().await?;
        let (Some(first), Some(last)) = (devices.first(), devices.last()) else {
            debug!("No video input devices, camera switch skipped");
            return Ok(());
        };

        let Some(local) = self.local.as_mut() else {
            return Err(RoomError::NotJoined);
        };
        let target = if local.device_id.as_deref() == Some(last.device_id.as_str()) {
            first.device_id.clone()
        } else {
            last.device_id.clone()
        };

        let settings_for = |source: Option<String>| PublisherSettings {
            video_source: source,
            publish_audio: local.audio_active,
            publish_video: local.video_active,
            ..PublisherSettings::from_config(&self.config.publisher)
        };
        let settings = settings_for(Some(target.clone()));
        let previous = settings_for(local.device_id.clone());

        if let Some(old) = local.handle {
            self.session.unpublish(old).await?;
            local.handle = None;
        }
        let handle = match self.session.publish(&settings).await {
            Ok(handle) => handle,
            Err(err) => {
                warn!(device = %target, error = %err, "Camera switch failed, republishing previous camera");
                match self.session.publish(&previous).await {
                    Ok(handle) => local.handle = Some(handle),
                    Err(e) => error!(error = %e, "Local stream lost after failed camera switch"),
                }
                return Err(err.into());
            }
        };
        local.handle = Some(handle);
        local.device_id = Some(target.clone());

        info!(device = %target, "Switched camera");
        self.dispatch_ui(UiAction::CameraFlipped);
        self.schedule_layout();
        Ok(())
    }
}
