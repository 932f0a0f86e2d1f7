//! Piece kinds, instances and the rank registry.
//!
//! - `PieceKind`: the five kinds and their labels
//! - `Piece`: a kind owned by a side at a position
//! - `PieceRegistry`: rank table and combat overrides

pub mod kind;
pub mod instance;
pub mod registry;

pub use kind::PieceKind;
pub use instance::Piece;
pub use registry::{PieceRegistry, RankOverride};
