//! Move validation.
//!
//! A move is legal when the game is in play, the piece belongs to the side
//! to move, the target is exactly one orthogonal step away, and the target
//! does not hold a piece of the mover's own side. Validation is a pure
//! predicate; it never touches the board.

use crate::board::{Board, Cell};
use crate::core::entity::PieceId;
use crate::core::error::GameError;
use crate::core::player::Side;
use crate::core::state::{GameState, Phase};
use crate::pieces::Piece;

/// Check a proposed move against the current state.
///
/// Checks run in a fixed order so the reported reason is stable: game over,
/// still in setup, unknown piece, off-board target, wrong side, not
/// adjacent, own piece on the target.
pub fn validate(board: &Board, state: &GameState, piece: PieceId, target: Cell) -> Result<(), GameError> {
    match state.phase {
        Phase::GameOver => return Err(GameError::GameAlreadyOver),
        Phase::Setup => return Err(GameError::NotStarted),
        Phase::Playing => {}
    }

    let piece = board.get(piece).ok_or(GameError::UnknownPiece(piece))?;
    let target = target.ensure_in_bounds()?;

    if piece.owner != state.mover {
        return Err(GameError::NotMoversTurn(piece.owner));
    }

    validate_step(board, piece, target)
}

/// The geometric and occupancy half of validation, without turn checks.
pub fn validate_step(board: &Board, piece: &Piece, target: Cell) -> Result<(), GameError> {
    if !piece.position.is_adjacent(target) {
        return Err(GameError::NotAdjacent {
            from: piece.position,
            to: target,
        });
    }

    match board.piece_at(target) {
        Some(occupant) if occupant.owner == piece.owner => Err(GameError::OccupiedBySelf(target)),
        _ => Ok(()),
    }
}

/// Cells a piece may step onto, attacks included, in neighbour order.
#[must_use]
pub fn legal_targets(board: &Board, piece: PieceId) -> Vec<Cell> {
    let Some(piece) = board.get(piece) else {
        return Vec::new();
    };

    board
        .neighbors(piece.position)
        .into_iter()
        .filter(|&cell| validate_step(board, piece, cell).is_ok())
        .collect()
}

/// Pieces of `side` with at least one legal target.
#[must_use]
pub fn movable_pieces(board: &Board, side: Side) -> Vec<PieceId> {
    board
        .piece_ids(side)
        .into_iter()
        .filter(|&id| !legal_targets(board, id).is_empty())
        .collect()
}
