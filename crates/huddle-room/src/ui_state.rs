//! Control-bar and overlay state as a pure reducer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub buttons_visible: bool,
    pub chat_open: bool,
    /// A chat message arrived while the overlay was closed.
    pub unread_chat: bool,
    pub mic_on: bool,
    pub cam_on: bool,
    pub back_camera: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            buttons_visible: true,
            chat_open: false,
            unread_chat: false,
            mic_on: true,
            cam_on: true,
            back_camera: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ToggleButtons,
    HideButtons,
    ChatOpened,
    ChatClosed,
    ChatReceived,
    MicChanged(bool),
    CamChanged(bool),
    CameraFlipped,
    Reset,
}

pub fn reduce(state: UiState, action: UiAction) -> UiState {
    match action {
        UiAction::ToggleButtons => UiState {
            buttons_visible: !state.buttons_visible,
            ..state
        },
        UiAction::HideButtons => UiState {
            buttons_visible: false,
            ..state
        },
        UiAction::ChatOpened => UiState {
            chat_open: true,
            unread_chat: false,
            buttons_visible: false,
            ..state
        },
        UiAction::ChatClosed => UiState {
            chat_open: false,
            buttons_visible: true,
            ..state
        },
        UiAction::ChatReceived => UiState {
            unread_chat: state.unread_chat || !state.chat_open,
            ..state
        },
        UiAction::MicChanged(on) => UiState { mic_on: on, ..state },
        UiAction::CamChanged(on) => UiState { cam_on: on, ..state },
        UiAction::CameraFlipped => UiState {
            back_camera: !state.back_camera,
            ..state
        },
        UiAction::Reset => UiState::default(),
    }
}

impl UiState {
    pub fn mic_icon(&self) -> &'static str {
        if self.mic_on {
            "mic"
        } else {
            "mic-off"
        }
    }

    pub fn mic_color(&self) -> &'static str {
        toggle_color(self.mic_on)
    }

    pub fn cam_icon(&self) -> &'static str {
        if self.cam_on {
            "videocam"
        } else {
            "eye-off"
        }
    }

    pub fn cam_color(&self) -> &'static str {
        toggle_color(self.cam_on)
    }

    /// Highlighted while the back camera is in use.
    pub fn camera_switch_color(&self) -> &'static str {
        toggle_color(!self.back_camera)
    }

    pub fn chat_color(&self) -> &'static str {
        if self.unread_chat {
            "secondary"
        } else {
            "light"
        }
    }
}

fn toggle_color(on: bool) -> &'static str {
    if on {
        "light"
    } else {
        "primary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_controls_with_media_on() {
        let state = UiState::default();
        assert!(state.buttons_visible);
        assert_eq!(state.mic_icon(), "mic");
        assert_eq!(state.cam_icon(), "videocam");
        assert_eq!(state.mic_color(), "light");
        assert_eq!(state.chat_color(), "light");
    }

    #[test]
    fn muting_changes_icon_and_color() {
        let state = reduce(UiState::default(), UiAction::MicChanged(false));
        assert_eq!(state.mic_icon(), "mic-off");
        assert_eq!(state.mic_color(), "primary");
        let state = reduce(state, UiAction::CamChanged(false));
        assert_eq!(state.cam_icon(), "eye-off");
        assert_eq!(state.cam_color(), "primary");
    }

    #[test]
    fn chat_received_while_closed_marks_unread() {
        let state = reduce(UiState::default(), UiAction::ChatReceived);
        assert!(state.unread_chat);
        assert_eq!(state.chat_color(), "secondary");
    }

    #[test]
    fn chat_received_while_open_stays_read() {
        let open = reduce(UiState::default(), UiAction::ChatOpened);
        let state = reduce(open, UiAction::ChatReceived);
        assert!(!state.unread_chat);
    }

    #[test]
    fn opening_chat_clears_unread_and_hides_buttons() {
        let unread = reduce(UiState::default(), UiAction::ChatReceived);
        let open = reduce(unread, UiAction::ChatOpened);
        assert!(open.chat_open);
        assert!(!open.unread_chat);
        assert!(!open.buttons_visible);

        let closed = reduce(open, UiAction::ChatClosed);
        assert!(!closed.chat_open);
        assert!(closed.buttons_visible);
    }

    #[test]
    fn camera_flip_toggles_highlight() {
        let state = reduce(UiState::default(), UiAction::CameraFlipped);
        assert!(state.back_camera);
        assert_eq!(state.camera_switch_color(), "primary");
        let state = reduce(state, UiAction::CameraFlipped);
        assert_eq!(state.camera_switch_color(), "light");
    }

    #[test]
    fn toggle_buttons_twice_is_identity() {
        let state = UiState::default();
        let twice = reduce(reduce(state, UiAction::ToggleButtons), UiAction::ToggleButtons);
        assert_eq!(state, twice);
    }

    #[test]
    fn reset_restores_defaults() {
        let state = reduce(UiState::default(), UiAction::MicChanged(false));
        assert_eq!(reduce(state, UiAction::Reset), UiState::default());
    }
}
