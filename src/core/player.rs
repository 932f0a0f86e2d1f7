//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The game always has exactly two sides: the human `Player`, who sets up
//! on the bottom two rows and moves first, and the computer `Opponent`,
//! who sets up on the top two rows.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, RangeInclusive};

use super::config::BOARD_SIZE;

/// One of the two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human side, home rows 4-5.
    Player,
    /// The computer side, home rows 0-1.
    Opponent,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// Get the raw side index (Player = 0, Opponent = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Rows reserved for this side's initial placement.
    ///
    /// ```
    /// use rust_stratego::core::Side;
    ///
    /// assert_eq!(Side::Player.setup_rows(), 4..=5);
    /// assert_eq!(Side::Opponent.setup_rows(), 0..=1);
    /// ```
    #[must_use]
    pub fn setup_rows(self) -> RangeInclusive<u8> {
        let last = BOARD_SIZE as u8 - 1;
        match self {
            Side::Player => (last - 1)..=last,
            Side::Opponent => 0..=1,
        }
    }

    /// The opposing back rank. A flag of this side standing on it wins.
    #[must_use]
    pub const fn goal_row(self) -> u8 {
        match self {
            Side::Player => 0,
            Side::Opponent => BOARD_SIZE as u8 - 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_stratego::core::{Side, SideMap};
///
/// let mut pieces: SideMap<usize> = SideMap::with_value(5);
/// pieces[Side::Opponent] -= 1;
///
/// assert_eq!(pieces[Side::Player], 5);
/// assert_eq!(pieces[Side::Opponent], 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Opponent)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
