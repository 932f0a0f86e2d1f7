//! Game state: phase, mover and outcome.
//!
//! ## Phases
//!
//! `Setup -> Playing -> GameOver`, one way only. The transitions live here
//! so that every caller goes through the same idempotency and
//! terminal-state guards.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// Coarse phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pieces are placed and may be rearranged; no moves yet.
    Setup,
    /// Sides alternate plies.
    Playing,
    /// Terminal. `winner` is set.
    GameOver,
}

/// Turn-level state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,

    /// Side permitted to act on the current ply.
    pub mover: Side,

    /// Winning side once `phase` is `GameOver`.
    pub winner: Option<Side>,

    /// Ticks left on the setup countdown.
    pub setup_remaining: u32,

    /// Plies completed since the game started (passes included).
    pub ply: u32,
}

impl GameState {
    /// Create the state of a fresh game in `Setup`.
    #[must_use]
    pub fn new(setup_seconds: u32) -> Self {
        Self {
            phase: Phase::Setup,
            mover: Side::Player,
            winner: None,
            setup_remaining: setup_seconds,
            ply: 0,
        }
    }

    #[must_use]
    pub fn is_setup(&self) -> bool {
        self.phase == Phase::Setup
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Leave `Setup`. Returns `false` (and changes nothing) if setup had
    /// already ended.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Setup {
            return false;
        }
        self.phase = Phase::Playing;
        self.mover = Side::Player;
        self.setup_remaining = 0;
        true
    }

    /// Hand the next ply to the other side.
    pub(crate) fn end_ply(&mut self) {
        self.ply += 1;
        self.mover = self.mover.other();
    }

    /// Enter `GameOver`. The mover is frozen at the side that won.
    pub(crate) fn finish(&mut self, winner: Side) {
        self.ply += 1;
        self.phase = Phase::GameOver;
        self.winner = Some(winner);
    }
}
