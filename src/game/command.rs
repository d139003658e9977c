use std::str::FromStr;

use crate::error::GameError;

/// A line typed while a match is on, decoded once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move { from: String, to: String },
    Restart,
    Exit,
    Help,
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.to_lowercase();
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.first().copied() {
            Some("move") | Some("mv") => {
                if tokens.len() < 3 {
                    return Err(GameError::MoveUsage);
                }
                Ok(Command::Move {
                    from: tokens[1].to_string(),
                    to: tokens[2].to_string(),
                })
            }
            Some("restart") => Ok(Command::Restart),
            Some("exit") => Ok(Command::Exit),
            Some("help") | Some("h") => Ok(Command::Help),
            _ => Err(GameError::UnknownCommand),
        }
    }
}
