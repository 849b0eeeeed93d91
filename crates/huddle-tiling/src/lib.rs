pub mod animation;
pub mod apply;
pub mod commands;
pub mod layout;
pub mod manager;
pub mod surface;
pub mod tile;

pub use apply::LayoutApplier;
pub use commands::TileCommand;
pub use layout::{compute_layout, LayoutEngine, LayoutOptions, Placement, RatioBounds};
pub use manager::TileManager;
pub use surface::TileSurface;
pub use tile::Tile;
