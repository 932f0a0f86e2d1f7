//! Core engine types: sides, piece ids, state, moves, RNG, configuration
//! and errors.
//!
//! Everything here is independent of the board layout and the combat rules.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use entity::PieceId;
pub use player::{Side, SideMap};
pub use rng::GameRng;
pub use config::{GameConfig, StalemateRule, BOARD_SIZE};
pub use action::{Move, MoveOutcome};
pub use state::{GameState, Phase};
pub use error::GameError;
