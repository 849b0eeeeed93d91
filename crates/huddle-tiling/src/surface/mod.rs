use huddle_common::types::{Rect, TileId};
use thiserror::Error;

pub mod memory;
pub mod noop;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SurfaceError {
    #[error("no view for {0}")]
    UnknownTile(TileId),

    #[error("surface detached: {0}")]
    Detached(String),
}

pub type Result<T> = std::result::Result<T, SurfaceError>;

/// Where tile rects end up: the host UI that owns the video views.
pub trait TileSurface: Send {
    fn place(&mut self, id: TileId, rect: Rect) -> Result<()>;
    fn remove(&mut self, id: TileId) -> Result<()>;
}
