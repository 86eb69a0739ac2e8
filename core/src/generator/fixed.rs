use super::*;

/// Places a caller-chosen layout, still refusing mines inside the first-click safe zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        let mut mines = mines.into();
        mines.sort_unstable();
        mines.dedup();
        Self { mines }
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(self, board: &mut Board, safe: Coord2) -> Result<()> {
        let actual = self.mines.len().try_into().unwrap_or(CellCount::MAX);
        let zone = begin_generation(board, safe, actual)?;

        for &coords in &self.mines {
            board.validate_coords(coords)?;
            if zone.contains(coords) {
                return Err(ConfigError::MineInSafeZone {
                    row: coords.0,
                    col: coords.1,
                }
                .into());
            }
        }

        for &coords in &self.mines {
            board.set_mine(coords)?;
        }
        board.finish_generation();
        log::debug!("Placed fixed layout of {} mines", actual);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board(mines: CellCount) -> Board {
        Board::new(GameConfig::new_unchecked(4, 4, mines))
    }

    #[test]
    fn places_given_mines_and_counts() {
        let mut board = empty_board(2);

        FixedMinefieldGenerator::new([(3, 3), (0, 3)])
            .generate(&mut board, (0, 0))
            .unwrap();

        assert!(board[(3, 3)].is_mine());
        assert!(board[(0, 3)].is_mine());
        assert_eq!(board[(1, 2)].adjacent_count(), 1);
        assert_eq!(board[(2, 3)].adjacent_count(), 1);
        assert_eq!(board[(2, 2)].adjacent_count(), 1);
        assert_eq!(board, Board::from_mine_coords((4, 4), &[(0, 3), (3, 3)]).unwrap());
    }

    #[test]
    fn duplicates_are_ignored() {
        assert_eq!(
            FixedMinefieldGenerator::new(vec![(1, 1), (0, 2), (1, 1)]).mines(),
            &[(0, 2), (1, 1)]
        );
    }

    #[test]
    fn refuses_mine_in_safe_zone() {
        let mut board = empty_board(1);

        assert_eq!(
            FixedMinefieldGenerator::new([(1, 1)]).generate(&mut board, (0, 0)),
            Err(GameError::Configuration(ConfigError::MineInSafeZone {
                row: 1,
                col: 1
            }))
        );
        assert!(!board.is_generated());
        assert_eq!(board.placed_mine_count(), 0);
    }

    #[test]
    fn refuses_wrong_count_and_out_of_bounds() {
        assert_eq!(
            FixedMinefieldGenerator::new([(3, 3)]).generate(&mut empty_board(2), (0, 0)),
            Err(GameError::Configuration(ConfigError::LayoutMismatch {
                expected: 2,
                actual: 1
            }))
        );
        assert_eq!(
            FixedMinefieldGenerator::new([(4, 0)]).generate(&mut empty_board(1), (0, 0)),
            Err(GameError::OutOfBounds { row: 4, col: 0 })
        );
    }
}
