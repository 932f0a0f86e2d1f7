//! # rust-stratego
//!
//! Rules engine for a two-player, hidden-information capture game on a
//! 6×6 board, played against a random computer opponent.
//!
//! ## Rules in Brief
//!
//! 1. **Setup**: each side gets one Flag, Private, ★1, ★2 and Spy, dealt
//!    at random into its two home rows. The player may rearrange during the
//!    setup countdown.
//!
//! 2. **Movement**: one orthogonal step per ply, never onto your own piece.
//!    Stepping onto an enemy piece is an attack.
//!
//! 3. **Combat**: higher rank wins and equal ranks trade, except that a
//!    Private beats a Spy. Any encounter involving a Flag ends the game in
//!    the attacker's favour.
//!
//! 4. **Winning**: capture the enemy Flag, attack with your own Flag, or
//!    walk your Flag onto the enemy back rank.
//!
//! ## Architecture
//!
//! - **Explicit state**: a `Game` value owns the board, the turn state and
//!   the RNG. Nothing is global.
//!
//! - **Seeded randomness**: setup and opponent choices come from a
//!   ChaCha8 stream, so a seed reproduces a whole game.
//!
//! - **External clock**: the setup countdown and the opponent's thinking
//!   delay are driven by the caller through `tick`, `force_start` and
//!   `opponent_turn`.
//!
//! ## Modules
//!
//! - `core`: sides, piece ids, state, moves, RNG, configuration, errors
//! - `pieces`: piece kinds, instances and the rank registry
//! - `board`: cells, occupancy and the concealed snapshot view
//! - `rules`: setup allocation, move validation, combat
//! - `opponent`: opponent move-selection policies
//! - `game`: turn controller and collaborator surface

pub mod core;
pub mod pieces;
pub mod board;
pub mod rules;
pub mod opponent;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PieceId, Side, SideMap,
    GameRng,
    GameConfig, StalemateRule, BOARD_SIZE,
    Move, MoveOutcome,
    GameState, Phase,
    GameError,
};

pub use crate::pieces::{Piece, PieceKind, PieceRegistry, RankOverride};

pub use crate::board::{Board, BoardSnapshot, Cell, CellView};

pub use crate::rules::{CombatResult, Verdict};

pub use crate::opponent::{OpponentPolicy, RandomOpponent};

pub use crate::game::{Game, Tick};
