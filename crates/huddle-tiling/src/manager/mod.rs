//! The TileManager tracks the tile set and the enlarged tile.

mod layout_compute;
mod operations;
mod types;

pub use types::*;
