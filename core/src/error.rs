use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates ({row}, {col}) are outside the board")]
    OutOfBounds { row: Coord, col: Coord },
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigError),
}

/// Caller-side mistakes in how a board or its minefield was set up.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Too many mines, requested {requested} but only {capacity} fit outside the safe zone")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Mine layout does not match the board, expected {expected} mines but got {actual}")]
    LayoutMismatch { expected: CellCount, actual: CellCount },
    #[error("Mine at ({row}, {col}) is inside the first-click safe zone")]
    MineInSafeZone { row: Coord, col: Coord },
    #[error("Mines were already placed on this board")]
    AlreadyGenerated,
    #[error("Adjacent mine count {count} is above 8")]
    InvalidCount { count: u8 },
}

pub type Result<T> = core::result::Result<T, GameError>;
