//! Error taxonomy for every fallible engine operation.
//!
//! All variants are recoverable: the caller decides whether to ignore the
//! action or surface a message. Winning is never an error.

use thiserror::Error;

use super::entity::PieceId;
use super::player::Side;
use crate::board::Cell;

/// Errors returned by board, setup, movement and turn operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell {0} is already occupied")]
    OccupiedCell(Cell),

    #[error("setup zone has {available} free cells but {required} pieces to place")]
    InsufficientCells { available: usize, required: usize },

    #[error("it is not {0}'s turn")]
    NotMoversTurn(Side),

    #[error("{to} is not one orthogonal step from {from}")]
    NotAdjacent { from: Cell, to: Cell },

    #[error("cell {0} is occupied by a piece of the same side")]
    OccupiedBySelf(Cell),

    #[error("game already over")]
    GameAlreadyOver,

    #[error("no piece can move")]
    NoLegalMove,

    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: i16, col: i16 },

    #[error("{0} is not on the board")]
    UnknownPiece(PieceId),

    #[error("setup phase has not ended")]
    NotStarted,

    #[error("pieces can only be rearranged during setup")]
    SetupClosed,

    #[error("{0} does not belong to the player")]
    NotOwnPiece(PieceId),

    #[error("cell {0} is outside the setup zone")]
    OutsideSetupZone(Cell),
}
