use rand::Rng;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy that fills an empty board with mines, keeping `safe` and its neighbors clear.
pub trait MinefieldGenerator {
    fn generate(self, board: &mut Board, safe: Coord2) -> Result<()>;
}

/// The first-click cell together with its in-bounds neighbors.
pub fn safe_zone(board: &Board, safe: Coord2) -> Result<SafeZone> {
    let mut zone = board.neighbors(safe)?;
    zone.insert(0, safe);
    Ok(SafeZone(zone))
}

/// Up to 9 cells that never receive a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct SafeZone(Neighbors);

impl SafeZone {
    pub fn contains(&self, coords: Coord2) -> bool {
        self.0.contains(&coords)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.0.iter().copied()
    }
}

/// Places exactly `mine_count` mines uniformly at random among every cell outside the safe zone
/// of `safe`, then counts adjacency.
///
/// Each subset of candidates of the requested size is equally likely.
pub fn generate<R: Rng + ?Sized>(
    board: &mut Board,
    safe: Coord2,
    mine_count: CellCount,
    rng: &mut R,
) -> Result<()> {
    let zone = begin_generation(board, safe, mine_count)?;

    let candidates: Vec<Coord2> = board
        .iter()
        .map(|(coords, _)| coords)
        .filter(|&coords| !zone.contains(coords))
        .collect();

    let requested = usize::from(mine_count);
    if requested > candidates.len() {
        log::warn!(
            "Cannot place {} mines, only {} cells outside the safe zone of {:?}",
            mine_count,
            candidates.len(),
            safe
        );
        return Err(ConfigError::TooManyMines {
            requested: mine_count,
            capacity: candidates.len().try_into().unwrap_or(CellCount::MAX),
        }
        .into());
    }

    for index in rand::seq::index::sample(rng, candidates.len(), requested) {
        board.set_mine(candidates[index])?;
    }

    board.finish_generation();
    log::debug!(
        "Generated {} mines on a {:?} board, safe at {:?}",
        mine_count,
        board.size(),
        safe
    );
    Ok(())
}

/// Checks shared by every generator before any mine is placed.
fn begin_generation(board: &Board, safe: Coord2, mine_count: CellCount) -> Result<SafeZone> {
    let safe = board.validate_coords(safe)?;

    if board.is_generated() {
        return Err(ConfigError::AlreadyGenerated.into());
    }

    if mine_count != board.mine_count() {
        return Err(ConfigError::LayoutMismatch {
            expected: board.mine_count(),
            actual: mine_count,
        }
        .into());
    }

    safe_zone(board, safe)
}
