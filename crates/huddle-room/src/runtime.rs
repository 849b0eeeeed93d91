//! Async driver for a [`RoomController`].
//!
//! One task owns the controller and serves, in order of arrival, user
//! commands, session events, and the debounce/animation deadline. Leaving
//! drops the session event receiver so late SDK callbacks go nowhere.

use huddle_common::TileId;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn};

use crate::controller::RoomController;
use crate::session::SessionEvent;

/// User gestures forwarded to the room.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomCommand {
    Join {
        room: String,
        nickname: Option<String>,
    },
    Leave,
    ToggleMic,
    ToggleCam,
    ToggleEnlarge(TileId),
    ResetEnlarged,
    SwitchCamera,
    ToggleChat,
    CloseChat,
    SendChat(String),
    Resize {
        width: f64,
        height: f64,
    },
}

pub struct RoomRuntime {
    controller: RoomController,
    events: Option<mpsc::Receiver<SessionEvent>>,
    commands: mpsc::Receiver<RoomCommand>,
}

impl RoomRuntime {
    pub fn new(
        controller: RoomController,
        events: mpsc::Receiver<SessionEvent>,
        commands: mpsc::Receiver<RoomCommand>,
    ) -> Self {
        Self {
            controller,
            events: Some(events),
            commands,
        }
    }

    /// Run until the room is left or every command sender is dropped.
    /// Returns the controller for inspection.
    pub async fn run(mut self) -> RoomController {
        loop {
            let deadline = self.controller.next_deadline(Instant::now());

            tokio::select! {
                cmd = self.commands.recv() => match cmd {
                    Some(RoomCommand::Leave) | None => {
                        self.shutdown().await;
                        break;
                    }
                    Some(cmd) => self.dispatch(cmd).await,
                },
                event = next_event(&mut self.events) => match event {
                    Some(event) => self.controller.handle_session_event(event).await,
                    None => {
                        debug!("Session event stream closed");
                        self.events = None;
                    }
                },
                _ = sleep_or_pending(deadline) => {
                    self.controller.poll(Instant::now());
                }
            }
        }
        self.controller
    }

    async fn shutdown(&mut self) {
        if let Some(mut events) = self.events.take() {
            events.close();
        }
        self.controller.leave_room().await;
    }

    async fn dispatch(&mut self, cmd: RoomCommand) {
        let result = match cmd {
            RoomCommand::Join { room, nickname } => {
                self.controller.join(&room, nickname.as_deref()).await
            }
            RoomCommand::ToggleMic => self.controller.toggle_mic().map(|_| ()),
            RoomCommand::ToggleCam => self.controller.toggle_cam().map(|_| ()),
            RoomCommand::ToggleEnlarge(tile) => self.controller.toggle_enlarge(tile),
            RoomCommand::ResetEnlarged => {
                self.controller.reset_enlarged();
                Ok(())
            }
            RoomCommand::SwitchCamera => self.controller.switch_camera().await,
            RoomCommand::ToggleChat => {
                self.controller.toggle_chat();
                Ok(())
            }
            RoomCommand::CloseChat => {
                self.controller.close_chat();
                Ok(())
            }
            RoomCommand::SendChat(text) => self.controller.send_chat(&text).await,
            RoomCommand::Resize { width, height } => {
                self.controller.resize(width, height);
                Ok(())
            }
            RoomCommand::Leave => Ok(()),
        };
        if let Err(e) = result {
            warn!(error = %e, "Room command failed");
        }
    }
}

async fn next_event(events: &mut Option<mpsc::Receiver<SessionEvent>>) -> Option<SessionEvent> {
    match events {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

async fn sleep_or_pending(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
