//! Read-only board view for rendering.
//!
//! The snapshot is taken from one side's point of view. Enemy pieces that
//! have not been revealed by combat show up as `Concealed`, without a kind,
//! so a renderer cannot leak them by accident.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::grid::Board;
use crate::core::config::BOARD_SIZE;
use crate::core::entity::PieceId;
use crate::core::player::{Side, SideMap};
use crate::pieces::PieceKind;

static EMPTY: CellView = CellView::Empty;

/// What the viewer sees on one cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Empty,
    /// A piece whose kind the viewer knows.
    Visible {
        id: PieceId,
        owner: Side,
        kind: PieceKind,
        label: String,
    },
    /// An enemy piece the viewer has not seen yet.
    Concealed { id: PieceId, owner: Side },
}

impl CellView {
    /// Owner of the piece shown, if any.
    #[must_use]
    pub fn owner(&self) -> Option<Side> {
        match self {
            CellView::Empty => None,
            CellView::Visible { owner, .. } | CellView::Concealed { owner, .. } => Some(*owner),
        }
    }
}

/// Row-major snapshot of every cell, as seen by `viewer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub viewer: Side,
    cells: Vec<CellView>,
    /// Live pieces per side.
    pub remaining: SideMap<usize>,
}

impl BoardSnapshot {
    /// Capture the board as `viewer` sees it.
    #[must_use]
    pub fn capture(board: &Board, viewer: Side) -> Self {
        let cells = Cell::all()
            .map(|cell| match board.piece_at(cell) {
                None => CellView::Empty,
                Some(piece) if piece.visible_to(viewer) => CellView::Visible {
                    id: piece.id,
                    owner: piece.owner,
                    kind: piece.kind,
                    label: piece.kind.label().to_string(),
                },
                Some(piece) => CellView::Concealed {
                    id: piece.id,
                    owner: piece.owner,
                },
            })
            .collect();

        Self {
            viewer,
            cells,
            remaining: SideMap::new(|side| board.piece_count(side)),
        }
    }

    /// View of a single cell. Off-board cells read as empty.
    #[must_use]
    pub fn get(&self, cell: Cell) -> &CellView {
        if !cell.in_bounds() {
            return &EMPTY;
        }
        &self.cells[cell.row as usize * BOARD_SIZE + cell.col as usize]
    }

    /// Rows of cell views, top (row 0) first.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(BOARD_SIZE)
    }
}
