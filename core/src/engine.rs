use core::time::Duration;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress (first open, mines are generated)
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// No further moves are accepted.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// One game from the first open to a win or loss.
///
/// Mines are placed lazily by the first [`GameSession::open`], around the opened cell. Once the
/// game is won or lost every mutating call is ignored; play again with a fresh session.
#[derive(Clone, Debug)]
pub struct GameSession<G = RandomMinefieldGenerator> {
    board: Board,
    generator: Option<G>,
    state: GameState,
    flags_remaining: CellCount,
    triggered_mine: Option<Coord2>,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl GameSession {
    /// Session with a random seed.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_generator(config, RandomMinefieldGenerator::default())
    }

    /// Session whose layout is reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMinefieldGenerator::new(seed))
    }
}

impl<G: MinefieldGenerator> GameSession<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "New {}x{} session with {} mines",
            config.rows,
            config.cols,
            config.mines
        );
        Ok(Self {
            board: Board::new(config),
            generator: Some(generator),
            state: GameState::default(),
            flags_remaining: config.mines,
            triggered_mine: None,
            started_at: None,
            ended_at: None,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn mines_generated(&self) -> bool {
        !self.state.is_initial()
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Mines minus placed flags, never negative since over-flagging is refused.
    pub fn flags_remaining(&self) -> CellCount {
        self.flags_remaining
    }

    pub fn revealed_count(&self) -> CellCount {
        self.board.revealed_count()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Read-only board access, hidden facts included.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Set by the first open.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<Instant> {
        self.ended_at
    }

    /// Time since the first open, frozen once the game ends.
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.ended_at) {
            (Some(started_at), Some(ended_at)) => ended_at.duration_since(started_at),
            (Some(started_at), None) => started_at.elapsed(),
            (None, _) => Duration::ZERO,
        }
    }

    /// What the player may see at `coords`.
    ///
    /// Mine positions only leak once the game is over.
    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        use CellView::*;

        let cell = self.board.get(coords)?;
        let lost = self.state == GameState::Lost;

        Ok(if self.triggered_mine == Some(coords) {
            TriggeredMine
        } else if cell.is_flagged() {
            if lost && !cell.is_mine() {
                Misflagged
            } else {
                Flagged
            }
        } else if cell.is_mine() && (cell.is_revealed() || self.state.is_finished()) {
            Mine
        } else if cell.is_revealed() {
            Revealed(cell.adjacent_count())
        } else {
            Hidden
        })
    }

    /// Opens a cell, generating the minefield around it on the first call.
    pub fn open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.state.is_finished() || self.board[coords].is_flagged() {
            return Ok(OpenOutcome::NoChange);
        }

        if self.state.is_initial() {
            self.start(coords)?;
        }

        let cells = match reveal(&mut self.board, coords)? {
            RevealResult::Mine => {
                self.board.set_revealed(coords)?;
                self.triggered_mine = Some(coords);
                self.end_game(false)?;
                return Ok(OpenOutcome::Exploded(coords));
            }
            RevealResult::Safe(cells) => cells,
        };

        Ok(if self.check_win()? {
            OpenOutcome::Won(cells)
        } else if cells.is_empty() {
            OpenOutcome::NoChange
        } else {
            OpenOutcome::Revealed(cells)
        })
    }

    /// Flags a hidden cell or removes its flag, refusing to place more flags than mines.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let coords = self.board.validate_coords(coords)?;
        let cell = self.board[coords];

        if self.state.is_finished() || cell.is_revealed() {
            return Ok(NoChange);
        }

        let outcome = if cell.is_flagged() {
            self.board.set_flagged(coords, false)?;
            self.flags_remaining += 1;
            Unflagged
        } else if self.flags_remaining > 0 {
            self.board.set_flagged(coords, true)?;
            self.flags_remaining -= 1;
            Flagged
        } else {
            log::debug!("No flags left, ignoring flag at {:?}", coords);
            NoChange
        };

        self.check_win()?;
        Ok(outcome)
    }

    fn start(&mut self, coords: Coord2) -> Result<()> {
        let generator = self
            .generator
            .take()
            .ok_or(GameError::Configuration(ConfigError::AlreadyGenerated))?;
        generator.generate(&mut self.board, coords)?;

        let now = Instant::now();
        self.started_at = Some(now);
        self.state = GameState::InProgress;
        log::debug!("Game started at {:?}", coords);
        Ok(())
    }

    fn check_win(&mut self) -> Result<bool> {
        if self.state == GameState::InProgress
            && self.board.revealed_count() == self.board.safe_cell_count()
        {
            self.end_game(true)?;
        }
        Ok(self.state == GameState::Won)
    }

    fn end_game(&mut self, won: bool) -> Result<()> {
        if self.state.is_finished() {
            return Ok(());
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        self.ended_at = Some(Instant::now());
        log::debug!("Game ended, won: {}, after {:?}", won, self.elapsed());
        self.reveal_mines(won)
    }

    /// On a win every mine gets flagged, on a loss every mine is revealed, flagged or not.
    ///
    /// `flags_remaining` is left alone on a loss.
    fn reveal_mines(&mut self, won: bool) -> Result<()> {
        let mines: Vec<Coord2> = self
            .board
            .iter()
            .filter(|(_, cell)| cell.is_mine() && cell.is_unrevealed())
            .map(|(coords, _)| coords)
            .collect();

        for coords in mines {
            if won {
                if self.board.set_flagged(coords, true)? {
                    self.flags_remaining = self.flags_remaining.saturating_sub(1);
                }
            } else {
                self.board.set_flagged(coords, false)?;
                self.board.set_revealed(coords)?;
            }
        }
        Ok(())
    }
}
