//! Piece instances: a kind owned by a side standing on a cell.

use serde::{Deserialize, Serialize};

use super::kind::PieceKind;
use crate::board::Cell;
use crate::core::entity::PieceId;
use crate::core::player::Side;

/// A piece on the board.
///
/// `position` is written only by `Board`, together with the board slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub owner: Side,
    pub position: Cell,
    /// Whether the enemy has seen this piece's kind. Set by combat.
    pub revealed: bool,
}

impl Piece {
    /// Create an unrevealed piece.
    #[must_use]
    pub fn new(id: PieceId, kind: PieceKind, owner: Side, position: Cell) -> Self {
        Self {
            id,
            kind,
            owner,
            position,
            revealed: false,
        }
    }

    /// Whether `viewer` may see this piece's kind.
    #[must_use]
    pub fn visible_to(&self, viewer: Side) -> bool {
        self.owner == viewer || self.revealed
    }
}
