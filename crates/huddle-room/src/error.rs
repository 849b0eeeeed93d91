use huddle_common::{HuddleError, SessionError, TileId};
use huddle_social::PayloadError;
use thiserror::Error;

use crate::permissions::PermissionReport;

#[derive(Debug, Error)]
pub enum RoomError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("{0}")]
    PermissionDenied(PermissionReport),

    #[error("invalid room name: {0:?}")]
    InvalidRoom(String),

    #[error("not joined to a room")]
    NotJoined,

    #[error("already joined to a room")]
    AlreadyJoined,

    #[error("unknown tile: {0}")]
    UnknownTile(TileId),

    #[error(transparent)]
    Payload(#[from] PayloadError),
}

impl From<RoomError> for HuddleError {
    fn from(err: RoomError) -> Self {
        match err {
            RoomError::Session(e) => HuddleError::Session(e),
            other => HuddleError::Other(other.to_string()),
        }
    }
}
