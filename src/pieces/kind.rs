//! Piece kinds and their display labels.

use serde::{Deserialize, Serialize};

/// The five kinds of piece. Each side owns exactly one of each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    /// Loses the game when captured; wins it by reaching the enemy back rank.
    Flag,
    /// Weakest fighter, but the only one that beats the Spy.
    Private,
    OneStar,
    TwoStar,
    /// Strongest fighter except against a Private.
    Spy,
}

impl PieceKind {
    /// Every kind, in the order pieces are dealt onto the board at setup.
    pub const SETUP_ORDER: [PieceKind; 5] = [
        PieceKind::TwoStar,
        PieceKind::OneStar,
        PieceKind::Spy,
        PieceKind::Private,
        PieceKind::Flag,
    ];

    /// Short label drawn on the piece.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PieceKind::TwoStar => "★2",
            PieceKind::OneStar => "★1",
            PieceKind::Spy => "S",
            PieceKind::Private => "P",
            PieceKind::Flag => "F",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
