use serde::{Deserialize, Serialize};

/// Facts stored for one board position.
///
/// A cell is never both `revealed` and `flagged`; [`Board`](crate::Board) only exposes setters
/// that keep it that way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) adjacent_count: u8,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    /// Number of mines among the neighbors, meaningless while [`Cell::is_mine`].
    pub const fn adjacent_count(self) -> u8 {
        self.adjacent_count
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    pub const fn is_unrevealed(self) -> bool {
        !self.revealed
    }
}

/// Player-visible state of a cell, what a host should draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// Mine shown once the game is over.
    Mine,
    /// The mine that ended the game.
    TriggeredMine,
    /// Flag on a safe cell, shown once the game is lost.
    Misflagged,
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
