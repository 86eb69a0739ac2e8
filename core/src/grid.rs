use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Up to 8 neighbor positions, stored inline.
pub type Neighbors = SmallVec<[Coord2; 8]>;

/// Bounds-checked rows by cols storage of [`Cell`] facts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
    generated: bool,
}

impl Board {
    /// Allocates an empty board with no mines placed yet.
    pub fn new(config: GameConfig) -> Self {
        Self {
            cells: Array2::default((config.rows, config.cols).to_nd_index()),
            mine_count: config.mines,
            revealed_count: 0,
            generated: false,
        }
    }

    /// Builds a fully generated board from explicit mine positions, counting adjacency.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self {
            cells: Array2::default(size.to_nd_index()),
            mine_count: 0,
            revealed_count: 0,
            generated: false,
        };

        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            if !board[coords].is_mine {
                board.mine_count += 1;
            }
            board.set_mine(coords)?;
        }
        board.finish_generation();

        Ok(board)
    }

    pub fn config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig::new_unchecked(rows, cols, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                row: coords.0,
                col: coords.1,
            })
        }
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mine_count)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Number of cells currently marked as mines, `0` before generation.
    pub fn placed_mine_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// In-bounds orthogonal and diagonal neighbors, in a stable row-major order.
    pub fn neighbors(&self, coords: Coord2) -> Result<Neighbors> {
        let coords = self.validate_coords(coords)?;
        Ok(self.iter_neighbors(coords).collect())
    }

    pub fn set_mine(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cell_mut(coords).is_mine = true;
        Ok(())
    }

    /// Stores a neighbor mine count, at most 8.
    pub fn set_count(&mut self, coords: Coord2, count: u8) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        if count > 8 {
            return Err(ConfigError::InvalidCount { count }.into());
        }
        self.cell_mut(coords).adjacent_count = count;
        Ok(())
    }

    /// Marks a cell revealed, returns whether anything changed.
    ///
    /// Flagged and already revealed cells are left untouched.
    pub fn set_revealed(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cell_mut(coords);
        if cell.revealed || cell.flagged {
            return Ok(false);
        }
        cell.revealed = true;
        self.revealed_count += 1;
        Ok(true)
    }

    /// Places or removes a flag, returns whether anything changed.
    ///
    /// Revealed cells never take a flag.
    pub fn set_flagged(&mut self, coords: Coord2, flagged: bool) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cell_mut(coords);
        if cell.revealed || cell.flagged == flagged {
            return Ok(false);
        }
        cell.flagged = flagged;
        Ok(true)
    }

    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbor_cells(coords)
            .filter(|cell| cell.is_mine)
            .count()
            .try_into()
            .unwrap_or(u8::MAX)
    }

    /// Whether mines have been placed and adjacency counted.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Counts adjacency for every non-mine cell, must run after all mines are placed.
    pub(crate) fn finish_generation(&mut self) {
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                if !self[coords].is_mine {
                    let count = self.count_adjacent_mines(coords);
                    self.cell_mut(coords).adjacent_count = count;
                }
            }
        }
        self.generated = true;
    }

    /// Row-major iteration over every position and its cell.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells.indexed_iter().map(|((row, col), &cell)| {
            // dimensions come from `Coord` values, so indices always fit
            ((row as Coord, col as Coord), cell)
        })
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
