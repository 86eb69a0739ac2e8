use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use sweeper_core::{CellCount, Coord, GameConfig, GameSession, MarkOutcome, OpenOutcome, Preset};

use command::{Command, HELP};
use settings::Settings;

mod command;
mod settings;
mod view;

/// Play minesweeper on the terminal, one command per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML settings file, flags given here take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board preset: beginner, intermediate or expert
    #[arg(short, long)]
    preset: Option<Preset>,

    #[arg(long)]
    rows: Option<Coord>,

    #[arg(long)]
    cols: Option<Coord>,

    #[arg(long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let file = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        Ok(file.merge(Settings {
            preset: self.preset,
            rows: self.rows,
            cols: self.cols,
            mines: self.mines,
            seed: self.seed,
        }))
    }
}

/// Seeds follow each other from a forced seed so replays are reproducible.
fn new_session(config: GameConfig, seed: Option<u64>, round: u64) -> anyhow::Result<GameSession> {
    let game = match seed {
        Some(seed) => GameSession::with_seed(config, seed.wrapping_add(round)),
        None => GameSession::new(config),
    };
    game.context("Could not start a game")
}

fn print_game(out: &mut impl Write, game: &GameSession) -> io::Result<()> {
    write!(out, "{}", view::board_text(game))?;
    writeln!(out, "{}", view::status_line(game))?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = args.settings()?;
    let config = settings
        .game_config()
        .context("Invalid board settings")?;
    log::debug!("settings: {:?}, config: {:?}", settings, config);

    let mut round = 0;
    let mut game = new_session(config, settings.seed, round)?;

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{HELP}")?;
    print_game(&mut out, &game)?;

    for line in stdin.lock().lines() {
        let line = line.context("Could not read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match command {
            Command::Open(coords) => match game.open(coords) {
                Ok(OpenOutcome::NoChange) => writeln!(out, "nothing to open at {coords:?}")?,
                Ok(outcome) => log::info!("opened {} cells", outcome.revealed_cells().len()),
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Flag(coords) => match game.toggle_flag(coords) {
                Ok(MarkOutcome::NoChange) => writeln!(out, "cannot flag {coords:?}")?,
                Ok(_) => {}
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::New => {
                round += 1;
                game = new_session(config, settings.seed, round)?;
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }

        print_game(&mut out, &game)?;
    }

    Ok(())
}
