//! Command-line interface for xo.

use clap::Parser;
use std::path::PathBuf;
use xo_core::Player;

/// XO - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "xo")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (player names, first player)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tracing filter, e.g. "debug" or "xo_core=trace" (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Player that moves first (overrides the config file)
    #[arg(long, value_parser = parse_player)]
    pub first: Option<Player>,
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s.trim() {
        "X" | "x" => Ok(Player::X),
        "O" | "o" => Ok(Player::O),
        other => Err(format!("expected X or O, got {:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["xo", "--config", "xo.toml", "--first", "o"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("xo.toml")));
        assert_eq!(cli.first, Some(Player::O));
        assert_eq!(cli.log_level, None);
    }

    #[test]
    fn test_rejects_unknown_player() {
        assert!(Cli::try_parse_from(["xo", "--first", "Z"]).is_err());
    }
}
