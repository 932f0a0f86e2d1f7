//! Piece registry: the rank table used for combat.
//!
//! Ranks are plain integers compared numerically. A short list of
//! overrides sits on top of the table for pairings where the numeric order
//! is inverted.

use serde::{Deserialize, Serialize};

use super::kind::PieceKind;

/// A pairing where the numeric rank comparison does not apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankOverride {
    pub attacker: PieceKind,
    pub defender: PieceKind,
    /// `true` if the attacker takes the defender, `false` if the attack fails.
    pub attacker_wins: bool,
}

/// Rank table plus overrides. Immutable for the lifetime of a game.
///
/// ## Example
///
/// ```
/// use rust_stratego::pieces::{PieceKind, PieceRegistry};
///
/// let registry = PieceRegistry::standard();
///
/// assert!(registry.rank(PieceKind::Spy) > registry.rank(PieceKind::TwoStar));
///
/// // A private still takes the spy.
/// let special = registry.override_for(PieceKind::Private, PieceKind::Spy).unwrap();
/// assert!(special.attacker_wins);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRegistry {
    ranks: [(PieceKind, u8); 5],
    overrides: Vec<RankOverride>,
}

impl Default for PieceRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl PieceRegistry {
    /// The standard table: Flag 0, Private 1, OneStar 2, TwoStar 3, Spy 4,
    /// with Private beating Spy in both directions of attack.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            ranks: [
                (PieceKind::Flag, 0),
                (PieceKind::Private, 1),
                (PieceKind::OneStar, 2),
                (PieceKind::TwoStar, 3),
                (PieceKind::Spy, 4),
            ],
            overrides: vec![
                RankOverride {
                    attacker: PieceKind::Private,
                    defender: PieceKind::Spy,
                    attacker_wins: true,
                },
                RankOverride {
                    attacker: PieceKind::Spy,
                    defender: PieceKind::Private,
                    attacker_wins: false,
                },
            ],
        }
    }

    /// Numeric rank of a kind.
    #[must_use]
    pub fn rank(&self, kind: PieceKind) -> u8 {
        self.ranks
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, rank)| *rank)
    }

    /// Override for an attacker/defender pairing, if one exists.
    #[must_use]
    pub fn override_for(&self, attacker: PieceKind, defender: PieceKind) -> Option<&RankOverride> {
        self.overrides
            .iter()
            .find(|o| o.attacker == attacker && o.defender == defender)
    }

    /// Kinds dealt to each side at setup, in dealing order.
    #[must_use]
    pub fn setup_kinds(&self) -> &'static [PieceKind] {
        &PieceKind::SETUP_ORDER
    }

    /// Display label of a kind.
    #[must_use]
    pub fn label(&self, kind: PieceKind) -> &'static str {
        kind.label()
    }
}
