use thiserror::Error;

use crate::{CellCount, Coord};

/// Rejected board dimensions or mine count.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Row count must be between {min} and {max}, got {value}")]
    Rows { value: Coord, min: Coord, max: Coord },
    #[error("Column count must be between {min} and {max}, got {value}")]
    Columns { value: Coord, min: Coord, max: Coord },
    #[error("Mine count must be between {min} and {max}, got {value}")]
    Mines {
        value: CellCount,
        min: CellCount,
        max: CellCount,
    },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Coordinates ({row}, {column}) are outside the board")]
    OutOfBounds { row: Coord, column: Coord },
    #[error("Cell ({row}, {column}) is already revealed")]
    AlreadyRevealed { row: Coord, column: Coord },
    #[error("Mine layout does not match the board")]
    InvalidLayout,
    #[error("Mines were already placed on this board")]
    AlreadySeeded,
    #[error("Mines have not been placed yet")]
    NotSeeded,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
