use chrono::Local;
use log::{debug, info};
use std::path::Path;

use super::history::History;
use crate::board::{move_rules, notation, Board, BoardSize, Color, Piece, PieceKind};
use crate::error::GameError;
use crate::ui::piece_glyph;

/// What a successful move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// Set when the move took the opposing king.
    pub winner: Option<Color>,
    /// Human-readable line, also written to the history.
    pub summary: String,
}

/// One match: the board, whose turn it is and where its history goes.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    history: History,
}

impl Game {
    pub fn start(size: BoardSize, history_dir: Option<&Path>) -> Self {
        let started = Local::now();
        let history = match history_dir {
            Some(dir) => History::new(dir, started),
            None => History::disabled(),
        };
        info!("Starting a {} match", size);
        history.log_event(&format!("Game started with board size {}", size));

        Self {
            board: Board::initial(size),
            turn: Color::White,
            history,
        }
    }

    pub fn with_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            history: History::disabled(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Throws this match away and sets up a fresh one of the same size.
    pub fn restart(self, history_dir: Option<&Path>) -> Self {
        info!("Resetting the match");
        self.history.log_event("Game reset");
        Game::start(self.board.size(), history_dir)
    }

    pub fn end_by_player(&self) {
        info!("Match ended by player");
        self.history.log_event("Game ended by player");
    }

    /// Validates and plays `from` -> `to`, both in human notation.
    ///
    /// A rejected move leaves the board and the turn exactly as they were.
    /// Taking the opposing king ends the match and keeps the turn with the
    /// winner.
    pub fn apply_move(&mut self, from: &str, to: &str) -> Result<MoveOutcome, GameError> {
        let size = self.board.size();
        let (from_pos, to_pos) = match (notation::decode(from, size), notation::decode(to, size)) {
            (Ok(from_pos), Ok(to_pos)) => (from_pos, to_pos),
            _ => return Err(GameError::InvalidCoordinates),
        };

        let piece = self.board.piece_at(from_pos).ok_or(GameError::NoPiece)?;
        match (self.turn, piece.color) {
            (Color::White, Color::Black) => return Err(GameError::WrongTurnWhite),
            (Color::Black, Color::White) => return Err(GameError::WrongTurnBlack),
            _ => {}
        }

        if !move_rules::is_legal_move(piece.kind, from_pos, to_pos) {
            return Err(GameError::IllegalMove);
        }

        let captured = self.board.piece_at(to_pos);
        if captured.is_some_and(|target| target.color == piece.color) {
            return Err(GameError::SelfCapture);
        }

        self.board.remove(from_pos);
        self.board.place(to_pos, piece);

        let winner = match captured {
            Some(target) if target.kind == PieceKind::King => Some(piece.color),
            _ => None,
        };
        if winner.is_none() {
            self.turn = self.turn.opposite();
        }

        let mut summary = format!("Moved {} from {} to {}.", piece_glyph(piece), from, to);
        if let Some(target) = captured {
            summary.push_str(&format!(" Captured {}", piece_glyph(target)));
        }
        debug!("{}", summary);
        self.history.log_event(&summary);

        if let Some(color) = winner {
            info!("{} captured the king", color);
            self.history.log_event(&format!("{} wins!", color));
            self.history.log_event("Game Over!");
        }

        Ok(MoveOutcome {
            piece,
            captured,
            winner,
            summary,
        })
    }
}
