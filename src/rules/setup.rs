//! Setup allocation: dealing each side's pieces into its home rows.
//!
//! Each kind is dropped onto a cell drawn uniformly, without replacement,
//! from the cells of the zone that are still free. The two sides draw from
//! separate RNG streams so one side's layout says nothing about the other's.
//!
//! Kinds are placed in shuffled order. Piece ids are handed out in placement
//! order, so an unshuffled deal would let a concealed piece's id name its kind.

use tracing::debug;

use crate::board::{Board, Cell};
use crate::core::entity::PieceId;
use crate::core::error::GameError;
use crate::core::player::{Side, SideMap};
use crate::core::rng::GameRng;
use crate::pieces::{PieceKind, PieceRegistry};

/// All cells of a side's setup zone, row-major.
#[must_use]
pub fn setup_zone(side: Side) -> Vec<Cell> {
    Cell::in_rows(side.setup_rows()).collect()
}

/// Whether a cell lies in a side's setup zone.
#[must_use]
pub fn in_setup_zone(side: Side, cell: Cell) -> bool {
    cell.in_bounds() && side.setup_rows().contains(&cell.row)
}

/// Place one piece of each kind for `side` on free cells of `zone`.
///
/// Fails with `InsufficientCells` before touching the board if the zone
/// cannot hold every kind.
pub fn allocate(
    board: &mut Board,
    side: Side,
    zone: &[Cell],
    kinds: &[PieceKind],
    rng: &mut GameRng,
) -> Result<Vec<PieceId>, GameError> {
    let mut available: Vec<Cell> = zone.iter().copied().filter(|&c| board.is_empty(c)).collect();
    if available.len() < kinds.len() {
        return Err(GameError::InsufficientCells {
            available: available.len(),
            required: kinds.len(),
        });
    }

    let mut order = kinds.to_vec();
    rng.shuffle(&mut order);

    let mut placed = Vec::with_capacity(order.len());
    for kind in order {
        let idx = rng.gen_range_usize(0..available.len());
        let cell = available.remove(idx);
        placed.push(board.place(kind, side, cell)?);
    }

    debug!(side = %side, pieces = placed.len(), "allocated setup");
    Ok(placed)
}

/// Deal the registry's kinds to both sides in their standard zones.
pub fn allocate_standard(
    board: &mut Board,
    registry: &PieceRegistry,
    rng: &GameRng,
) -> Result<SideMap<Vec<PieceId>>, GameError> {
    let mut placed = SideMap::with_value(Vec::new());
    for side in Side::ALL {
        let mut stream = rng.for_context(&format!("setup:{side}"));
        placed[side] = allocate(board, side, &setup_zone(side), registry.setup_kinds(), &mut stream)?;
    }
    Ok(placed)
}
