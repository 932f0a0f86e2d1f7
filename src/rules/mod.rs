//! Game rules: setup allocation, move validation and combat.
//!
//! These are free functions over `Board` and `GameState`. The turn
//! controller in `game` sequences them; nothing here tracks whose turn it
//! is beyond reading `GameState::mover`.

pub mod setup;
pub mod movement;
pub mod combat;

pub use setup::{allocate, allocate_standard, in_setup_zone, setup_zone};
pub use movement::{legal_targets, movable_pieces, validate, validate_step};
pub use combat::{resolve, verdict, CombatResult, Verdict};
