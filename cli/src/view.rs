use core::fmt::Write;
use sweeper_core::{CellView, GameSession, GameState, MinefieldGenerator};

pub fn cell_char(view: CellView) -> char {
    use CellView::*;
    match view {
        Hidden => '#',
        Flagged => 'F',
        Revealed(0) => '.',
        Revealed(count) => char::from(b'0' + count),
        Mine => '*',
        TriggeredMine => 'X',
        Misflagged => '!',
    }
}

pub fn status_line<G: MinefieldGenerator>(game: &GameSession<G>) -> String {
    let state = match game.state() {
        GameState::NotStarted => "open any cell to start",
        GameState::InProgress => "in progress",
        GameState::Won => "you won!",
        GameState::Lost => "you hit a mine",
    };
    format!(
        "flags left: {}  time: {}s  {}",
        game.flags_remaining(),
        game.elapsed().as_secs(),
        state
    )
}

/// Plain-text board with column digits on top and row numbers on the left.
pub fn board_text<G: MinefieldGenerator>(game: &GameSession<G>) -> String {
    let (rows, cols) = game.size();
    let mut out = String::from("    ");
    for col in 0..cols {
        out.push(char::from(b'0' + col % 10));
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{row:>3} ");
        for col in 0..cols {
            let view = game.cell_view((row, col)).unwrap_or_default();
            out.push(cell_char(view));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{FixedMinefieldGenerator, GameConfig};

    fn game() -> GameSession<FixedMinefieldGenerator> {
        let config = GameConfig::new(5, 5, 2).unwrap();
        GameSession::with_generator(config, FixedMinefieldGenerator::new([(3, 4), (4, 3)])).unwrap()
    }

    #[test]
    fn hidden_board_before_start() {
        let text = board_text(&game());

        assert_eq!(text.lines().next(), Some("    01234"));
        assert_eq!(text.lines().nth(1), Some("  0 #####"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn board_after_loss_shows_mines() {
        let mut game = game();
        game.open((0, 0)).unwrap();
        game.toggle_flag((4, 4)).unwrap();
        game.open((3, 4)).unwrap();

        let text = board_text(&game);

        assert_eq!(text.lines().nth(4), Some("  3 ..12X"));
        assert_eq!(text.lines().nth(5), Some("  4 ..1*!"));
        assert!(status_line(&game).contains("you hit a mine"));
    }
}
