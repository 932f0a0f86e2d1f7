//! Board coordinates and orthogonal adjacency.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::RangeInclusive;

use crate::core::config::BOARD_SIZE;
use crate::core::error::GameError;

/// Up, Down, Left, Right. Neighbour enumeration follows this order.
const DIRECTIONS: [(i16, i16); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A square of the board. Row 0 is the opponent's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    /// Create a cell. Bounds are checked by the board, not here.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Create a cell from signed coordinates, rejecting anything off the board.
    pub fn checked(row: i16, col: i16) -> Result<Self, GameError> {
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    #[must_use]
    pub fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Fail with `OutOfBounds` unless the cell is on the board.
    pub fn ensure_in_bounds(self) -> Result<Self, GameError> {
        Self::checked(self.row as i16, self.col as i16)
    }

    /// The in-bounds orthogonal neighbours, in Up, Down, Left, Right order.
    ///
    /// ```
    /// use rust_stratego::board::Cell;
    ///
    /// let corner = Cell::new(0, 0);
    /// assert_eq!(corner.neighbors().as_slice(), &[Cell::new(1, 0), Cell::new(0, 1)]);
    /// ```
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Cell; 4]> {
        DIRECTIONS
            .iter()
            .filter_map(|(dr, dc)| Self::checked(self.row as i16 + dr, self.col as i16 + dc).ok())
            .collect()
    }

    /// Exactly one orthogonal step apart.
    #[must_use]
    pub fn is_adjacent(self, other: Cell) -> bool {
        let dr = (self.row as i16 - other.row as i16).abs();
        let dc = (self.col as i16 - other.col as i16).abs();
        dr + dc == 1
    }

    /// Every cell of the board, row-major.
    pub fn all() -> impl Iterator<Item = Cell> {
        Self::in_rows(0..=(BOARD_SIZE as u8 - 1))
    }

    /// Every cell in the given rows, row-major.
    pub fn in_rows(rows: RangeInclusive<u8>) -> impl Iterator<Item = Cell> {
        rows.flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Cell::new(row, col)))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
