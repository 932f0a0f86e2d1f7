//! Combat arbitration.
//!
//! Resolution order, first match wins:
//!
//! 1. A flag attacking ends the game for its owner.
//! 2. Attacking a flag ends the game for the attacker's owner.
//! 3. Registry overrides (Private vs Spy in either direction).
//! 4. Numeric rank: higher rank takes the lower; equal ranks trade.
//!
//! The kind-level decision (`verdict`) is pure. `resolve` applies it to
//! the board.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::entity::PieceId;
use crate::core::error::GameError;
use crate::core::player::Side;
use crate::pieces::{PieceKind, PieceRegistry};

/// How an encounter between two kinds ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The attacker's owner wins the game outright.
    AttackerWinsGame,
    /// The defender is removed and the attacker takes its cell.
    AttackerTakes,
    /// The attacker is removed; the defender stays.
    DefenderHolds,
    /// Both pieces are removed and the cell is left empty.
    BothRemoved,
}

/// Decide an encounter from the kinds alone.
///
/// ```
/// use rust_stratego::pieces::{PieceKind, PieceRegistry};
/// use rust_stratego::rules::{verdict, Verdict};
///
/// let registry = PieceRegistry::standard();
/// assert_eq!(verdict(&registry, PieceKind::Private, PieceKind::Spy), Verdict::AttackerTakes);
/// assert_eq!(verdict(&registry, PieceKind::Spy, PieceKind::Private), Verdict::DefenderHolds);
/// ```
#[must_use]
pub fn verdict(registry: &PieceRegistry, attacker: PieceKind, defender: PieceKind) -> Verdict {
    if attacker == PieceKind::Flag || defender == PieceKind::Flag {
        return Verdict::AttackerWinsGame;
    }

    if let Some(special) = registry.override_for(attacker, defender) {
        return if special.attacker_wins {
            Verdict::AttackerTakes
        } else {
            Verdict::DefenderHolds
        };
    }

    match registry.rank(attacker).cmp(&registry.rank(defender)) {
        std::cmp::Ordering::Greater => Verdict::AttackerTakes,
        std::cmp::Ordering::Less => Verdict::DefenderHolds,
        std::cmp::Ordering::Equal => Verdict::BothRemoved,
    }
}

/// What happened in one encounter, with both kinds now public.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResult {
    pub attacker: PieceId,
    pub defender: PieceId,
    pub attacker_kind: PieceKind,
    pub defender_kind: PieceKind,
    pub attacker_survived: bool,
    pub defender_survived: bool,
    pub winner: Option<Side>,
}

/// Resolve an attack and apply it to the board.
///
/// Losers are removed; a winning attacker moves onto the defender's cell;
/// survivors are marked revealed. A game-winning encounter leaves the
/// board as it was apart from the reveal.
pub fn resolve(
    board: &mut Board,
    registry: &PieceRegistry,
    attacker: PieceId,
    defender: PieceId,
) -> Result<CombatResult, GameError> {
    let (attacker_kind, owner) = board
        .get(attacker)
        .map(|p| (p.kind, p.owner))
        .ok_or(GameError::UnknownPiece(attacker))?;
    let (defender_kind, defender_cell) = board
        .get(defender)
        .map(|p| (p.kind, p.position))
        .ok_or(GameError::UnknownPiece(defender))?;

    let outcome = verdict(registry, attacker_kind, defender_kind);
    debug!(?attacker_kind, ?defender_kind, ?outcome, "combat");

    let (attacker_survived, defender_survived, winner) = match outcome {
        Verdict::AttackerWinsGame => (true, true, Some(owner)),
        Verdict::AttackerTakes => {
            board.remove(defender);
            board.move_piece(attacker, defender_cell)?;
            (true, false, None)
        }
        Verdict::DefenderHolds => {
            board.remove(attacker);
            (false, true, None)
        }
        Verdict::BothRemoved => {
            board.remove(attacker);
            board.remove(defender);
            (false, false, None)
        }
    };

    for id in [attacker, defender] {
        if let Some(piece) = board.get_mut(id) {
            piece.revealed = true;
        }
    }

    Ok(CombatResult {
        attacker,
        defender,
        attacker_kind,
        defender_kind,
        attacker_survived,
        defender_survived,
        winner,
    })
}
