use log::debug;
use std::path::PathBuf;

use crate::board::{parse_dimension, BoardSize, Color, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::GameError;
use crate::ui::{draw_box_message, HELP_MESSAGE};

pub mod command;
mod game;
pub mod history;

pub use command::Command;
pub use game::{Game, MoveOutcome};
pub use history::{History, HistoryError, DEFAULT_HISTORY_DIR};

const WELCOME_MESSAGE: &str = "Welcome to Tower Chess";
const PROMPT_WIDTH: &str = "Enter Board width (X): ";
const PROMPT_HEIGHT: &str = "Enter Board height (Y): ";
const PROMPT_COMMAND: &str = "\nType a command (type help for options): \n> ";
const WHITE_TURN_INDICATOR: &str = "⬜ Turn: White";
const BLACK_TURN_INDICATOR: &str = "⬛ Turn: Black";
const WHITE_WINS: &str = "⬜ White wins! 🎉";
const BLACK_WINS: &str = "⬛ Black wins! 🎉";
const GAME_OVER_THANKS: &str = "Game Over! Thanks for playing!";
const GAME_ENDED: &str = "Game ended by player. Thanks for playing!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where history files go; `None` turns the history off.
    pub history_dir: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_dir: Some(PathBuf::from(DEFAULT_HISTORY_DIR)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Winner(Color),
    Exited,
}

#[derive(Debug, Clone)]
pub enum Phase {
    AwaitingWidth,
    AwaitingHeight { width: u8 },
    InProgress(Game),
    Finished { game: Game, ending: Ending },
}

/// The whole interactive game as a value.
///
/// Every line of input consumes the session and yields the next one together
/// with the complete text frame to show.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    phase: Phase,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            phase: Phase::AwaitingWidth,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn game(&self) -> Option<&Game> {
        match &self.phase {
            Phase::InProgress(game) | Phase::Finished { game, .. } => Some(game),
            _ => None,
        }
    }

    /// True once the player has left; nothing more will be accepted.
    pub fn is_terminated(&self) -> bool {
        matches!(
            self.phase,
            Phase::Finished {
                ending: Ending::Exited,
                ..
            }
        )
    }

    /// The frame to show before any input has been given.
    pub fn frame(&self) -> String {
        self.render(None)
    }

    pub fn handle_input(self, line: &str) -> (Session, String) {
        let Session { config, phase } = self;
        let history_dir = config.history_dir.clone();

        let (phase, notice) = match phase {
            Phase::AwaitingWidth => match parse_dimension(line) {
                Ok(width) => (Phase::AwaitingHeight { width }, None),
                Err(e) => (Phase::AwaitingWidth, Some(e.to_string())),
            },
            Phase::AwaitingHeight { width } => {
                match parse_dimension(line).and_then(|height| BoardSize::new(width, height)) {
                    Ok(size) => (
                        Phase::InProgress(Game::start(size, history_dir.as_deref())),
                        Some(format!("Creating board of size {}", size)),
                    ),
                    Err(e) => (Phase::AwaitingHeight { width }, Some(e.to_string())),
                }
            }
            Phase::InProgress(game) => play(game, line, history_dir),
            Phase::Finished { game, ending } => after_finish(game, ending, line, history_dir),
        };

        let session = Session { config, phase };
        let frame = session.render(notice.as_deref());
        (session, frame)
    }

    fn render(&self, notice: Option<&str>) -> String {
        let mut frame = String::new();
        match &self.phase {
            Phase::AwaitingWidth | Phase::AwaitingHeight { .. } => {
                frame.push_str(&draw_box_message(WELCOME_MESSAGE));
                frame.push_str("\nSelect board size to start.\n");
                frame.push_str(&format!(
                    "Values must be between {} and {} on each dimension.\n\n",
                    MIN_BOARD_SIZE, MAX_BOARD_SIZE
                ));
                if let Some(notice) = notice {
                    frame.push_str(&format!("{}\n\n", notice));
                }
                frame.push_str(match self.phase {
                    Phase::AwaitingWidth => PROMPT_WIDTH,
                    _ => PROMPT_HEIGHT,
                });
            }
            Phase::InProgress(game) => {
                frame.push_str("\n\n");
                frame.push_str(&game.board().render_to_string());
                frame.push_str(&format!("\n{}\n", turn_indicator(game.turn())));
                if let Some(notice) = notice {
                    frame.push_str(&format!("\n{}\n", notice));
                }
                frame.push_str(PROMPT_COMMAND);
            }
            Phase::Finished {
                game,
                ending: Ending::Winner(color),
            } => {
                frame.push_str("\n\n");
                frame.push_str(&game.board().render_to_string());
                if let Some(notice) = notice {
                    frame.push_str(&format!("\n{}\n", notice));
                }
                frame.push('\n');
                frame.push_str(&draw_box_message(win_message(*color)));
                frame.push_str(&format!("\n{}\n", GAME_OVER_THANKS));
                frame.push_str(PROMPT_COMMAND);
            }
            Phase::Finished {
                ending: Ending::Exited, ..
            } => {
                frame.push_str(&format!("\n{}\n", GAME_ENDED));
            }
        }
        frame
    }
}

fn play(mut game: Game, line: &str, history_dir: Option<PathBuf>) -> (Phase, Option<String>) {
    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(e) => return (Phase::InProgress(game), Some(e.to_string())),
    };

    match command {
        Command::Help => (Phase::InProgress(game), Some(HELP_MESSAGE.clone())),
        Command::Restart => (Phase::InProgress(game.restart(history_dir.as_deref())), None),
        Command::Exit => {
            game.end_by_player();
            (
                Phase::Finished {
                    game,
                    ending: Ending::Exited,
                },
                None,
            )
        }
        Command::Move { from, to } => match game.apply_move(&from, &to) {
            Ok(MoveOutcome {
                winner: Some(color),
                summary,
                ..
            }) => (
                Phase::Finished {
                    game,
                    ending: Ending::Winner(color),
                },
                Some(summary),
            ),
            Ok(outcome) => (Phase::InProgress(game), Some(outcome.summary)),
            Err(e) => {
                debug!("Rejected move {} {}: {}", from, to, e);
                (Phase::InProgress(game), Some(e.to_string()))
            }
        },
    }
}

/// A won match still takes `restart`, `help` and `exit`; moves are refused.
fn after_finish(
    game: Game,
    ending: Ending,
    line: &str,
    history_dir: Option<PathBuf>,
) -> (Phase, Option<String>) {
    if ending == Ending::Exited {
        return (Phase::Finished { game, ending }, None);
    }
    match line.parse::<Command>() {
        Ok(Command::Move { .. }) => {
            (Phase::Finished { game, ending }, Some(GameError::GameOver.to_string()))
        }
        Ok(Command::Help) => (Phase::Finished { game, ending }, Some(HELP_MESSAGE.clone())),
        Ok(_) => play(game, line, history_dir),
        Err(e) => (Phase::Finished { game, ending }, Some(e.to_string())),
    }
}

fn turn_indicator(turn: Color) -> &'static str {
    match turn {
        Color::White => WHITE_TURN_INDICATOR,
        Color::Black => BLACK_TURN_INDICATOR,
    }
}

fn win_message(winner: Color) -> &'static str {
    match winner {
        Color::White => WHITE_WINS,
        Color::Black => BLACK_WINS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::test_utils::board_with;
    use crate::board::{Board, Piece, Position};
    use std::fs;
    use std::path::Path;

    fn quiet() -> Session {
        Session::new(SessionConfig { history_dir: None })
    }

    fn feed(session: Session, lines: &[&str]) -> (Session, String) {
        let mut frame = session.frame();
        let mut session = session;
        for line in lines {
            let (next, next_frame) = session.handle_input(line);
            session = next;
            frame = next_frame;
        }
        (session, frame)
    }

    fn started(width: &str, height: &str) -> Session {
        feed(quiet(), &[width, height]).0
    }

    fn recorded(dir: &Path) -> Session {
        Session::new(SessionConfig {
            history_dir: Some(dir.to_path_buf()),
        })
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tower-chess-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn history_of(session: &Session) -> (PathBuf, String) {
        let path = session.game().unwrap().history().path().unwrap().to_path_buf();
        let written = fs::read_to_string(&path).unwrap();
        (path, written)
    }

    #[test]
    fn test_first_frame_asks_for_width() {
        let frame = quiet().frame();
        assert!(frame.contains("Welcome to Tower Chess"));
        assert!(frame.contains("Values must be between 6 and 12 on each dimension."));
        assert!(frame.ends_with(PROMPT_WIDTH));
    }

    #[test]
    fn test_invalid_width_stays_put() {
        let (session, frame) = feed(quiet(), &["5"]);
        assert!(matches!(session.phase(), Phase::AwaitingWidth));
        assert!(frame.contains("Invalid input. Please enter a number between 6 and 12."));
        assert!(frame.ends_with(PROMPT_WIDTH));

        let (session, _) = feed(session, &["abc"]);
        assert!(matches!(session.phase(), Phase::AwaitingWidth));
    }

    #[test]
    fn test_dimension_prompts() {
        let (session, frame) = feed(quiet(), &["9"]);
        assert!(matches!(session.phase(), Phase::AwaitingHeight { width: 9 }));
        assert!(frame.ends_with(PROMPT_HEIGHT));

        let (session, frame) = feed(session, &["13"]);
        assert!(matches!(session.phase(), Phase::AwaitingHeight { width: 9 }));
        assert!(frame.contains("between 6 and 12"));

        let (session, frame) = feed(session, &["7"]);
        let game = session.game().unwrap();
        assert_eq!(game.board(), &Board::initial(BoardSize::new(9, 7).unwrap()));
        assert_eq!(game.turn(), Color::White);
        assert!(frame.contains("Creating board of size 9x7"));
        assert!(frame.contains(WHITE_TURN_INDICATOR));
        assert!(frame.ends_with(PROMPT_COMMAND));
    }

    #[test]
    fn test_move_updates_frame_and_turn() {
        let (session, frame) = feed(started("8", "8"), &["move C1 D3"]);
        assert_eq!(session.game().unwrap().turn(), Color::Black);
        assert!(frame.contains(BLACK_TURN_INDICATOR));
        assert!(frame.contains("Moved ♘ from c1 to d3."));
        assert!(frame.contains("  3 │   │   │   │ ♘ │"));
    }

    #[test]
    fn test_rejected_move_reports_reason() {
        let (session, frame) = feed(started("8", "8"), &["move a1 a3"]);
        assert!(matches!(session.phase(), Phase::InProgress(_)));
        assert_eq!(session.game().unwrap().turn(), Color::White);
        assert!(frame.contains("Invalid move for this piece type."));
        assert!(frame.contains(WHITE_TURN_INDICATOR));
    }

    #[test]
    fn test_command_errors() {
        let (_, frame) = feed(started("8", "8"), &["move a1"]);
        assert!(frame.contains("Usage: move <from> <to>"));
        let (_, frame) = feed(started("8", "8"), &["dance"]);
        assert!(frame.contains("Unknown command. Type 'help' for available commands."));
        let (_, frame) = feed(started("8", "8"), &["help"]);
        assert!(frame.contains("Available commands:"));
    }

    #[test]
    fn test_restart_twice_gives_fresh_board() {
        let (session, _) = feed(started("10", "6"), &["move b1 b4", "restart"]);
        let once = session.game().unwrap().board().clone();
        let (session, _) = feed(session, &["restart"]);
        assert_eq!(session.game().unwrap().board(), &once);
        assert_eq!(once, Board::initial(BoardSize::new(10, 6).unwrap()));
        assert_eq!(session.game().unwrap().turn(), Color::White);
    }

    #[test]
    fn test_exit_terminates() {
        let (session, frame) = feed(started("8", "8"), &["exit"]);
        assert!(session.is_terminated());
        assert!(frame.contains("Game ended by player"));
        let (session, _) = feed(session, &["restart"]);
        assert!(session.is_terminated());
    }

    #[test]
    fn test_king_capture_finishes_match() {
        let (session, frame) = feed(
            started("6", "6"),
            &["move b1 b4", "move f6 f5", "move b4 e4", "move d6 c4", "move e4 f5"],
        );
        assert!(matches!(
            session.phase(),
            Phase::Finished {
                ending: Ending::Winner(Color::White),
                ..
            }
        ));
        assert!(frame.contains("Moved ♖ from e4 to f5. Captured ♚"));
        assert!(frame.contains(WHITE_WINS));
    }

    #[test]
    fn test_win_announcement() {
        let board = board_with(
            6,
            6,
            &[("a1", Piece::WHITE_KING), ("d4", Piece::WHITE_HORSE), ("e6", Piece::BLACK_KING)],
        );
        let session = Session {
            config: SessionConfig { history_dir: None },
            phase: Phase::InProgress(Game::with_board(board, Color::White)),
        };

        let (session, frame) = session.handle_input("move d4 e6");
        assert!(matches!(
            session.phase(),
            Phase::Finished {
                ending: Ending::Winner(Color::White),
                ..
            }
        ));
        assert_eq!(session.game().unwrap().turn(), Color::White);
        assert!(frame.contains("Moved ♘ from d4 to e6. Captured ♚"));
        assert!(frame.contains(WHITE_WINS));
        assert!(frame.contains(GAME_OVER_THANKS));
        assert!(!session.is_terminated());

        let (session, frame) = session.handle_input("move e6 e5");
        assert!(frame.contains("The game is over."));
        let horse = session.game().unwrap().board().piece_at(Position::new(4, 0));
        assert_eq!(horse, Some(Piece::WHITE_HORSE));

        let (session, frame) = session.handle_input("help");
        assert!(frame.contains("Available commands:"));
        assert!(matches!(session.phase(), Phase::Finished { .. }));

        let (session, _) = session.handle_input("restart");
        assert!(matches!(session.phase(), Phase::InProgress(_)));
        assert_eq!(session.game().unwrap().board(), &Board::initial(BoardSize::new(6, 6).unwrap()));
    }

    #[test]
    fn test_history_records_events() {
        let dir = scratch_dir("session");
        let (session, _) = feed(recorded(&dir), &["6", "6", "move c1 d3", "exit"]);
        let (path, written) = history_of(&session);
        assert!(path.starts_with(&dir));
        assert_eq!(
            written,
            "Game started with board size 6x6\nMoved ♘ from c1 to d3.\nGame ended by player\n"
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_history_records_win() {
        let dir = scratch_dir("session-win");
        let (session, _) = feed(
            recorded(&dir),
            &["6", "6", "move b1 b4", "move f6 f5", "move b4 e4", "move d6 c4", "move e4 f5"],
        );
        let (_, written) = history_of(&session);
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Game started with board size 6x6");
        assert_eq!(
            &lines[5..],
            &["Moved ♖ from e4 to f5. Captured ♚", "White wins!", "Game Over!"]
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_restart_opens_new_history_file() {
        let dir = scratch_dir("session-restart");
        let (session, _) = feed(recorded(&dir), &["6", "6", "move c1 d3"]);
        let (old_path, _) = history_of(&session);

        // File names have one-second resolution.
        std::thread::sleep(std::time::Duration::from_millis(1100));
        let (session, _) = feed(session, &["restart"]);
        let (new_path, written) = history_of(&session);

        assert_ne!(new_path, old_path);
        assert_eq!(written, "Game started with board size 6x6\n");
        assert_eq!(
            fs::read_to_string(&old_path).unwrap(),
            "Game started with board size 6x6\nMoved ♘ from c1 to d3.\nGame reset\n"
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unwritable_history_does_not_interrupt_play() {
        let dir = scratch_dir("session-blocked");
        fs::create_dir_all(&dir).unwrap();
        // A plain file where the history directory should go.
        let blocker = dir.join("history");
        fs::write(&blocker, "").unwrap();

        let (session, frame) = feed(recorded(&blocker), &["8", "8", "move c1 d3"]);
        let game = session.game().unwrap();
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.board().piece_at(Position::new(3, 5)), Some(Piece::WHITE_HORSE));
        assert!(frame.contains("Moved ♘ from c1 to d3."));
        assert!(!frame.contains("could not write"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
