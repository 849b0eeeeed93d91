use huddle_common::types::TileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileCommand {
    Enlarge(TileId),
    ClearEnlarged,
    Remove(TileId),
}
