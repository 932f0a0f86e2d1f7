//! Opponent move selection.
//!
//! ## OpponentPolicy
//!
//! Picks a move for a side without applying it. Scheduling (the "thinking"
//! delay) belongs to the caller.
//!
//! ## RandomOpponent
//!
//! Draws a piece uniformly from the side's pieces, then a destination
//! uniformly from that piece's empty neighbours. A piece with nowhere to go
//! is dropped from the candidate set and another is drawn. The random
//! opponent never attacks; it only steps onto empty cells.

use crate::board::Board;
use crate::core::action::Move;
use crate::core::error::GameError;
use crate::core::player::Side;
use crate::core::rng::GameRng;
use crate::core::state::GameState;

/// Policy for choosing a computer-controlled side's move.
pub trait OpponentPolicy {
    /// Choose a move for `side`.
    ///
    /// Returns `NoLegalMove` if no piece of `side` can move, and
    /// `GameAlreadyOver` once the game has ended.
    fn choose_move(
        &self,
        board: &Board,
        state: &GameState,
        side: Side,
        rng: &mut GameRng,
    ) -> Result<Move, GameError>;
}

/// Uniform random piece, then uniform random empty neighbour.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomOpponent;

impl OpponentPolicy for RandomOpponent {
    fn choose_move(
        &self,
        board: &Board,
        state: &GameState,
        side: Side,
        rng: &mut GameRng,
    ) -> Result<Move, GameError> {
        if state.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let mut candidates = board.piece_ids(side);
        while !candidates.is_empty() {
            let idx = rng.gen_range_usize(0..candidates.len());
            let id = candidates[idx];

            let targets = board
                .get(id)
                .map(|piece| board.empty_neighbors(piece.position))
                .unwrap_or_default();

            if let Some(&to) = rng.choose(targets.as_slice()) {
                return Ok(Move::new(id, to));
            }
            candidates.swap_remove(idx);
        }

        Err(GameError::NoLegalMove)
    }
}
