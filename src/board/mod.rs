//! Board geometry and occupancy.
//!
//! - `Cell`: a coordinate with orthogonal adjacency
//! - `Board`: which piece stands where
//! - `BoardSnapshot`: the player-facing, concealment-aware view

pub mod cell;
pub mod grid;
pub mod view;

pub use cell::Cell;
pub use grid::Board;
pub use view::{BoardSnapshot, CellView};
