//! Board and game-state engine for a single-player grid-deduction (minesweeper) game.
//!
//! Hosts create a [`GameSession`] from a [`GameConfig`], forward player actions to
//! [`GameSession::open`] and [`GameSession::toggle_flag`], and redraw from
//! [`GameSession::cell_view`].

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod reveal;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Validated constructor, every mine must fit outside the largest possible first-click
    /// safe zone so that any first open succeeds.
    ///
    /// Stricter than `mines < rows * cols`: a 3x3 board takes no mines at all.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> core::result::Result<Self, ConfigError> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard);
        }

        let capacity = self.mine_capacity();
        if self.mines > capacity {
            log::warn!(
                "Refusing {}x{} board with {} mines, only {} fit",
                self.rows,
                self.cols,
                self.mines,
                capacity
            );
            return Err(ConfigError::TooManyMines {
                requested: self.mines,
                capacity,
            });
        }

        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Most mines a board of this size accepts.
    pub const fn mine_capacity(&self) -> CellCount {
        self.total_cells() - max_safe_zone(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Preset::Beginner.config()
    }
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}

/// Conventional board sizes, a host convenience that the engine does not enforce.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> GameConfig {
        use Preset::*;
        match self {
            Beginner => GameConfig::new_unchecked(9, 9, 10),
            Intermediate => GameConfig::new_unchecked(16, 16, 40),
            Expert => GameConfig::new_unchecked(16, 30, 99),
        }
    }

    pub const fn name(self) -> &'static str {
        use Preset::*;
        match self {
            Beginner => "beginner",
            Intermediate => "intermediate",
            Expert => "expert",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown preset {0:?}, expected beginner, intermediate or expert")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OpenOutcome {
    NoChange,
    /// Newly revealed cells, the opened one included.
    Revealed(Vec<Coord2>),
    /// Final batch of revealed cells that completed the board.
    Won(Vec<Coord2>),
    /// The mine that was opened.
    Exploded(Coord2),
}

impl OpenOutcome {
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub fn revealed_cells(&self) -> &[Coord2] {
        match self {
            Self::Revealed(cells) | Self::Won(cells) => cells,
            Self::NoChange | Self::Exploded(_) => &[],
        }
    }
}
