use core::str::FromStr;
use sweeper_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Open(Coord2),
    Flag(Coord2),
    New,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("Expected `{0} ROW COL`")]
    MissingCoords(&'static str),
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
}

fn parse_coords<'a>(
    name: &'static str,
    mut args: impl Iterator<Item = &'a str>,
) -> Result<Coord2, ParseCommandError> {
    let mut next = || {
        let arg = args.next().ok_or(ParseCommandError::MissingCoords(name))?;
        arg.parse::<Coord>()
            .map_err(|_| ParseCommandError::InvalidCoord(arg.to_owned()))
    };
    let row = next()?;
    let col = next()?;
    Ok((row, col))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(ParseCommandError::Empty)?;

        Ok(match word.to_ascii_lowercase().as_str() {
            "o" | "open" => Command::Open(parse_coords("open", words)?),
            "f" | "flag" => Command::Flag(parse_coords("flag", words)?),
            "n" | "new" => Command::New,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(word.to_owned())),
        })
    }
}

pub const HELP: &str = "\
commands:
  open ROW COL   (o)  reveal a cell
  flag ROW COL   (f)  place or remove a flag
  new            (n)  start over with the same settings
  help           (h)  show this message
  quit           (q)  leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_and_aliases() {
        assert_eq!("open 3 4".parse::<Command>(), Ok(Command::Open((3, 4))));
        assert_eq!("  F 0 12 ".parse::<Command>(), Ok(Command::Flag((0, 12))));
        assert_eq!("n".parse::<Command>(), Ok(Command::New));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "dig 1 1".parse::<Command>(),
            Err(ParseCommandError::Unknown("dig".into()))
        );
        assert_eq!(
            "o 1".parse::<Command>(),
            Err(ParseCommandError::MissingCoords("open"))
        );
        assert_eq!(
            "f 1 -2".parse::<Command>(),
            Err(ParseCommandError::InvalidCoord("-2".into()))
        );
    }
}
