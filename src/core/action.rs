//! Move representation and the outcomes of applying one.
//!
//! A `Move` is a piece plus the cell it steps onto. The turn controller
//! reports what happened as a `MoveOutcome`.

use serde::{Deserialize, Serialize};

use super::entity::PieceId;
use super::player::Side;
use crate::board::Cell;
use crate::rules::CombatResult;

/// A single ply: one piece stepping onto one cell.
///
/// ```
/// use rust_stratego::board::Cell;
/// use rust_stratego::core::{Move, PieceId};
///
/// let mv = Move::new(PieceId(3), Cell::new(3, 2));
/// assert_eq!(mv.to, Cell::new(3, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The piece being moved.
    pub piece: PieceId,

    /// Destination cell.
    pub to: Cell,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(piece: PieceId, to: Cell) -> Self {
        Self { piece, to }
    }
}

/// Result of a legal ply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The piece stepped onto an empty cell.
    Moved { piece: PieceId, from: Cell, to: Cell },

    /// The piece attacked an enemy piece; nobody won.
    Combat(CombatResult),

    /// The ply ended the game.
    GameOver { winner: Side },

    /// The mover had no legal ply and forfeited it.
    Passed { side: Side },
}

impl MoveOutcome {
    /// The winner, if this ply ended the game.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            MoveOutcome::GameOver { winner } => Some(*winner),
            _ => None,
        }
    }
}
