#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use stats::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod game;
mod generator;
pub mod reveal;
mod stats;
mod types;

/// Smallest accepted row or column count.
pub const MIN_SIDE: Coord = 2;

/// Largest accepted row or column count.
pub const MAX_SIDE: Coord = i16::MAX as Coord;

/// Validated board dimensions and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Sides must be within [`MIN_SIDE`]..=[`MAX_SIDE`] and `mines` within [`mine_bounds`].
    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> core::result::Result<Self, ConfigError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&rows) {
            return Err(ConfigError::Rows {
                value: rows,
                min: MIN_SIDE,
                max: MAX_SIDE,
            });
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&columns) {
            return Err(ConfigError::Columns {
                value: columns,
                min: MIN_SIDE,
                max: MAX_SIDE,
            });
        }
        let (min, max) = mine_bounds(rows, columns);
        if !(min..=max).contains(&mines) {
            return Err(ConfigError::Mines {
                value: mines,
                min,
                max,
            });
        }
        Ok(Self::new_unchecked((rows, columns), mines))
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn columns(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Accepted mine range for a board: 5% to 90% of the cells, rounded down, never below one.
pub const fn mine_bounds(rows: Coord, columns: Coord) -> (CellCount, CellCount) {
    let total = mult(rows, columns) as u64;
    let min = total * 5 / 100;
    let max = total * 90 / 100;
    let min = if min < 1 { 1 } else { min };
    let max = if max < 1 { 1 } else { max };
    (min as CellCount, max as CellCount)
}

/// Preset board sizes offered by front ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
    Custom,
}

impl Difficulty {
    pub const PRESETS: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    /// Fixed configuration for presets, `None` for [`Difficulty::Custom`].
    pub const fn preset(self) -> Option<GameConfig> {
        match self {
            Self::Beginner => Some(GameConfig::new_unchecked((9, 9), 10)),
            Self::Intermediate => Some(GameConfig::new_unchecked((16, 16), 40)),
            Self::Expert => Some(GameConfig::new_unchecked((16, 30), 99)),
            Self::Custom => None,
        }
    }
}

/// Result of an accepted player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A mark was set or cleared, nothing was revealed.
    Marked,
    /// This many cells were newly revealed, cascade included.
    Revealed(CellCount),
    HitMine,
    Won,
}

impl ActionOutcome {
    /// Whether the action ended the game
    pub const fn is_final(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}
