use rand::{SeedableRng, rngs::SmallRng};

use super::*;

/// Purely random generation apart from the first-click safe zone, reproducible from its seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RandomMinefieldGenerator {
    fn default() -> Self {
        Self::new(rand::random())
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, board: &mut Board, safe: Coord2) -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mine_count = board.mine_count();
        generate(board, safe, mine_count, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(seed: u64, safe: Coord2) -> Board {
        let mut board = Board::new(Preset::Intermediate.config());
        RandomMinefieldGenerator::new(seed)
            .generate(&mut board, safe)
            .unwrap();
        board
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(generated(99, (8, 8)), generated(99, (8, 8)));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(generated(1, (0, 0)), generated(2, (0, 0)));
    }

    #[test]
    fn generated_board_matches_config() {
        let board = generated(5, (15, 15));

        assert!(board.is_generated());
        assert_eq!(board.placed_mine_count(), 40);
        assert_eq!(board.config(), Preset::Intermediate.config());
    }
}
