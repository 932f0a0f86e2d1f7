//! Turn controller.
//!
//! `Game` owns one game instance and is the single surface a presentation
//! layer talks to:
//!
//! - Setup: `new_game`, `rearrange`, `tick`, `force_start`
//! - Play: `attempt_move`, `opponent_turn`
//! - Rendering: `board_snapshot`, `current_state`
//!
//! Timing (the setup clock, the opponent's thinking delay) is driven from
//! outside; the engine only exposes the transitions.

mod controller;

pub use controller::{Game, Tick};
