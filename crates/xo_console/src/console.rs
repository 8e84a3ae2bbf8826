//! Terminal game loop.
//!
//! Reads one selection per line, hands it to a [`Session`] and prints the
//! board after every accepted move. All rules live in `xo_core`; this
//! module only translates between text and the engine.

use crate::config::ConsoleConfig;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use xo_core::{Board, Cell, Outcome, SelectionError, Session, TurnError};

/// How a console game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// A win or a draw.
    Completed(Outcome),
    /// Input ran out before the game ended.
    Abandoned,
}

/// Parses a line into a selection.
///
/// Numbers are passed through unchecked so the engine can reject them;
/// cell labels such as "center" map to their index.
fn parse_selection(line: &str) -> Option<i64> {
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| Cell::from_label(trimmed).map(|cell| cell.index() as i64))
}

fn describe(err: &TurnError, board: &Board) -> String {
    match err {
        TurnError::Selection(SelectionError::OutOfScope { selection }) => {
            format!("{} is not on the board, choose a cell from 1 to 9.", selection)
        }
        TurnError::Selection(SelectionError::PositionAlreadySet { cell }) => {
            let free = board
                .free_cells()
                .iter()
                .map(|free| free.index().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} is already taken, free cells: {}.", cell, free)
        }
        TurnError::GameOver => "The game is already over.".to_string(),
    }
}

/// Runs one game, reading moves from `input` and writing to `output`.
#[instrument(skip_all, fields(first_player = %config.first_player()))]
pub fn run<R: BufRead, W: Write>(
    config: &ConsoleConfig,
    mut input: R,
    mut output: W,
) -> std::io::Result<Finish> {
    let mut session = Session::starting_with(*config.first_player());
    writeln!(output, "{}\n", session.board())?;

    let mut line = String::new();
    loop {
        let player = session.mechanics().get_active_user();
        write!(output, "{} ({}), your move: ", config.name_of(player), player)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!(moves_played = session.moves_played(), "Input closed");
            writeln!(output)?;
            return Ok(Finish::Abandoned);
        }

        let Some(selection) = parse_selection(&line) else {
            debug!(input = line.trim(), "Unparseable selection");
            writeln!(output, "Please enter a number from 1 to 9.")?;
            continue;
        };

        let outcome = match session.play(selection) {
            Ok(outcome) => outcome,
            Err(err) => {
                writeln!(output, "{}", describe(&err, session.board()))?;
                continue;
            }
        };

        writeln!(output, "\n{}\n", session.board())?;
        match outcome {
            Outcome::Continue => {}
            Outcome::Win(winner) => {
                writeln!(output, "{} ({}) wins!", config.name_of(winner), winner)?;
                return Ok(Finish::Completed(outcome));
            }
            Outcome::Draw => {
                writeln!(output, "It's a draw.")?;
                return Ok(Finish::Completed(outcome));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use xo_core::Player;

    fn play(config: &ConsoleConfig, moves: &str) -> (Finish, String) {
        let mut output = Vec::new();
        let finish = run(config, Cursor::new(moves.to_string()), &mut output).unwrap();
        (finish, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection(" 5\n"), Some(5));
        assert_eq!(parse_selection("-2"), Some(-2));
        assert_eq!(parse_selection("top right"), Some(3));
        assert_eq!(parse_selection("banana"), None);
    }

    #[test]
    fn test_x_wins() {
        let (finish, text) = play(&ConsoleConfig::default(), "1\n4\n2\n5\n3\n");
        assert_eq!(finish, Finish::Completed(Outcome::Win(Player::X)));
        assert!(text.contains("Player X (X) wins!"));
        assert!(text.contains("X|X|X"));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let (finish, text) = play(&ConsoleConfig::default(), "abc\n10\n5\n5\n1\n");
        assert_eq!(finish, Finish::Abandoned);
        assert!(text.contains("Please enter a number from 1 to 9."));
        assert!(text.contains("10 is not on the board"));
        assert!(text.contains("Center (5) is already taken, free cells: 1, 2, 3, 4, 6, 7, 8, 9."));
        assert!(text.contains("O|2|3"));
    }

    #[test]
    fn test_draw() {
        let (finish, text) = play(&ConsoleConfig::default(), "2\n1\n4\n3\n6\n5\n7\n8\n9\n");
        assert_eq!(finish, Finish::Completed(Outcome::Draw));
        assert!(text.ends_with("It's a draw.\n"));
    }

    #[test]
    fn test_configured_names_and_first_player() {
        let config = ConsoleConfig::from_toml("first_player = \"O\"\no_name = \"Ada\"").unwrap();
        let (_, text) = play(&config, "");
        assert!(text.contains("Ada (O), your move: "));
    }
}
