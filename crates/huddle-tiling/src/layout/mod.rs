mod calculation;
pub mod grid;
mod types;

pub use calculation::{arrange, compute_layout, split_container};
pub use types::*;
