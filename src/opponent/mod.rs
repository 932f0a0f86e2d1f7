//! Computer opponent.
//!
//! The policy only decides; `Game::opponent_turn` applies the decision.

pub mod policy;

pub use policy::{OpponentPolicy, RandomOpponent};
