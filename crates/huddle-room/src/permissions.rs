//! Camera/microphone grant checks for platforms that gate them at runtime.

use std::fmt;

use async_trait::async_trait;
use huddle_common::SessionError;

/// Grant state of each permission the room needs before publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionReport {
    pub camera: bool,
    pub record_audio: bool,
    pub modify_audio_settings: bool,
}

impl PermissionReport {
    pub fn granted() -> Self {
        Self {
            camera: true,
            record_audio: true,
            modify_audio_settings: true,
        }
    }

    pub fn all_granted(&self) -> bool {
        self.camera && self.record_audio && self.modify_audio_settings
    }
}

impl fmt::Display for PermissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Permissions denied:\n CAMERA = {}\n AUDIO = {}\n AUDIO_SETTINGS = {}",
            self.camera, self.record_audio, self.modify_audio_settings
        )
    }
}

/// Requests the grants and reports their state.
#[async_trait]
pub trait PermissionChecker: Send {
    async fn check(&mut self) -> Result<PermissionReport, SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_granted_requires_every_grant() {
        assert!(PermissionReport::granted().all_granted());
        let report = PermissionReport {
            modify_audio_settings: false,
            ..PermissionReport::granted()
        };
        assert!(!report.all_granted());
    }

    #[test]
    fn display_is_one_line_per_permission() {
        let text = PermissionReport::granted().to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("Permissions denied:"));
    }
}
