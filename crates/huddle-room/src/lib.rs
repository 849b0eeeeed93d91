//! Room controller for a video call screen.
//!
//! Joins a media session through the [`MediaSession`] seam, keeps the
//! participant list, and drives the tile layout from `huddle-tiling`:
//! - Token fetch and session connect with one modal alert on failure
//! - Participant join/leave bookkeeping with one tile per participant
//! - Debounced layout recompute on resize, enlarge, and track changes
//! - Chat overlay log fed by session signals
//! - UI toggles as a pure state reducer

pub mod controller;
pub mod debounce;
pub mod error;
pub mod logging;
pub mod participant;
pub mod permissions;
pub mod runtime;
pub mod session;
pub mod token;
pub mod ui_state;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{layout_options, RoomController};
pub use error::RoomError;
pub use participant::{Participant, Role};
pub use permissions::{PermissionChecker, PermissionReport};
pub use runtime::{RoomCommand, RoomRuntime};
pub use session::{
    ConnectionInfo, MediaHandle, MediaSession, PublisherSettings, SessionEvent, VideoDevice,
};
pub use token::{HttpTokenService, TokenProvider};
pub use ui_state::{reduce, UiAction, UiState};
