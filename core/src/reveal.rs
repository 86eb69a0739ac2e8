use crate::*;

/// Result of opening one cell on a generated board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealResult {
    /// Newly revealed cells, empty when nothing could be opened.
    Safe(Vec<Coord2>),
    /// The target holds a mine, the board was left untouched.
    Mine,
}

impl RevealResult {
    pub fn is_mine(&self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Opens `coords`, flooding out from zero-count cells.
///
/// Flagged and already revealed cells are never opened or re-visited, which bounds the work to
/// one visit per cell. Cells with a non-zero count are revealed but stop the flood.
pub fn reveal(board: &mut Board, coords: Coord2) -> Result<RevealResult> {
    let coords = board.validate_coords(coords)?;
    let cell = board[coords];

    if cell.is_revealed() || cell.is_flagged() {
        return Ok(RevealResult::Safe(Vec::new()));
    }

    if cell.is_mine() {
        return Ok(RevealResult::Mine);
    }

    let mut opened = Vec::new();
    let mut to_visit = vec![coords];

    while let Some(visit_coords) = to_visit.pop() {
        // set_revealed refuses revealed or flagged cells, so each cell is opened at most once
        if !board.set_revealed(visit_coords)? {
            continue;
        }
        opened.push(visit_coords);

        let visit_cell = board[visit_coords];
        log::trace!(
            "Opened cell at {:?}, mine count: {}",
            visit_coords,
            visit_cell.adjacent_count()
        );

        if visit_cell.adjacent_count() == 0 {
            to_visit.extend(board.iter_neighbors(visit_coords).filter(|&pos| {
                let neighbor = board[pos];
                !neighbor.is_revealed() && !neighbor.is_flagged()
            }));
        }
    }

    log::debug!("Reveal at {:?} opened {} cells", coords, opened.len());
    Ok(RevealResult::Safe(opened))
}
