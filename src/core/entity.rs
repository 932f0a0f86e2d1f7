//! Piece identification.
//!
//! Every piece on the board has a unique `PieceId`, allocated by the board
//! when the piece is placed. Ids are never reused within a game, so a
//! captured piece's id stays dead.

use serde::{Deserialize, Serialize};

/// Unique identifier for a piece within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_id_display() {
        assert_eq!(PieceId(7).to_string(), "Piece(7)");
        assert_eq!(PieceId(7).raw(), 7);
    }

    #[test]
    fn test_piece_id_ordering() {
        assert!(PieceId(1) < PieceId(2));
    }
}
