//! The 6×6 board: cell occupancy plus ownership of every live piece.
//!
//! The `Board` tracks which piece stands on which cell and keeps each
//! piece's `position` in sync with its slot. It never checks whether a move
//! is legal; that is the move validator's job. It does refuse anything that
//! would put two pieces on one cell.

use rustc_hash::FxHashMap;

use super::cell::Cell;
use crate::core::config::BOARD_SIZE;
use crate::core::entity::PieceId;
use crate::core::error::GameError;
use crate::core::player::Side;
use crate::pieces::{Piece, PieceKind};

/// Board occupancy and piece storage.
///
/// ## Usage
///
/// ```
/// use rust_stratego::board::{Board, Cell};
/// use rust_stratego::core::Side;
/// use rust_stratego::pieces::PieceKind;
///
/// let mut board = Board::new();
/// let private = board.place(PieceKind::Private, Side::Player, Cell::new(4, 2)).unwrap();
///
/// board.move_piece(private, Cell::new(3, 2)).unwrap();
///
/// assert!(board.is_empty(Cell::new(4, 2)));
/// assert_eq!(board.piece_at(Cell::new(3, 2)).unwrap().id, private);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Board {
    /// Occupancy: slot -> piece standing there.
    cells: [[Option<PieceId>; BOARD_SIZE]; BOARD_SIZE],

    /// Live pieces by id.
    pieces: FxHashMap<PieceId, Piece>,

    next_id: u32,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, cell: Cell) -> Option<PieceId> {
        self.cells[cell.row as usize][cell.col as usize]
    }

    fn slot_mut(&mut self, cell: Cell) -> &mut Option<PieceId> {
        &mut self.cells[cell.row as usize][cell.col as usize]
    }

    /// Put a new piece on an empty cell and return its id.
    pub fn place(&mut self, kind: PieceKind, owner: Side, cell: Cell) -> Result<PieceId, GameError> {
        let cell = cell.ensure_in_bounds()?;
        if self.slot(cell).is_some() {
            return Err(GameError::OccupiedCell(cell));
        }

        let id = PieceId(self.next_id);
        self.next_id += 1;

        *self.slot_mut(cell) = Some(id);
        self.pieces.insert(id, Piece::new(id, kind, owner, cell));
        Ok(id)
    }

    /// The piece standing on a cell, if any. Off-board cells are empty.
    #[must_use]
    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        if !cell.in_bounds() {
            return None;
        }
        self.slot(cell).and_then(|id| self.pieces.get(&id))
    }

    #[must_use]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.piece_at(cell).is_none()
    }

    /// Look up a live piece.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(&id)
    }

    /// Relocate a piece. The origin becomes empty.
    ///
    /// Returns the origin cell. Fails if the target holds another piece.
    pub fn move_piece(&mut self, id: PieceId, target: Cell) -> Result<Cell, GameError> {
        let target = target.ensure_in_bounds()?;
        let from = self.get(id).ok_or(GameError::UnknownPiece(id))?.position;
        if from == target {
            return Ok(from);
        }
        if self.slot(target).is_some() {
            return Err(GameError::OccupiedCell(target));
        }

        *self.slot_mut(from) = None;
        *self.slot_mut(target) = Some(id);
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.position = target;
        }
        Ok(from)
    }

    /// Take a piece off the board entirely.
    ///
    /// Returns the removed piece, or `None` if it was not on the board.
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.pieces.remove(&id)?;
        *self.slot_mut(piece.position) = None;
        Some(piece)
    }

    /// Orthogonal neighbours of a cell, in Up, Down, Left, Right order.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> smallvec::SmallVec<[Cell; 4]> {
        cell.neighbors()
    }

    /// Neighbours with nothing on them.
    #[must_use]
    pub fn empty_neighbors(&self, cell: Cell) -> smallvec::SmallVec<[Cell; 4]> {
        cell.neighbors()
            .into_iter()
            .filter(|&n| self.is_empty(n))
            .collect()
    }

    /// Ids of a side's live pieces, in ascending order.
    #[must_use]
    pub fn piece_ids(&self, side: Side) -> Vec<PieceId> {
        let mut ids: Vec<_> = self
            .pieces
            .values()
            .filter(|p| p.owner == side)
            .map(|p| p.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// A side's live pieces, in ascending id order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.piece_ids(side).into_iter().filter_map(move |id| self.pieces.get(&id))
    }

    /// Number of live pieces a side has.
    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces.values().filter(|p| p.owner == side).count()
    }

    /// Total number of live pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Free cells in the given rows, row-major.
    #[must_use]
    pub fn empty_cells_in_rows(&self, rows: std::ops::RangeInclusive<u8>) -> Vec<Cell> {
        Cell::in_rows(rows).filter(|&c| self.is_empty(c)).collect()
    }
}
