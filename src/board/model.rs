use std::fmt;

use crate::error::GameError;

pub const MIN_BOARD_SIZE: u8 = 6;
pub const MAX_BOARD_SIZE: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Tower,
    Horse,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::King => write!(f, "K"),
            PieceKind::Tower => write!(f, "T"),
            PieceKind::Horse => write!(f, "H"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceKind::King);
    pub const WHITE_TOWER: Piece = Piece::new(Color::White, PieceKind::Tower);
    pub const WHITE_HORSE: Piece = Piece::new(Color::White, PieceKind::Horse);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceKind::King);
    pub const BLACK_TOWER: Piece = Piece::new(Color::Black, PieceKind::Tower);
    pub const BLACK_HORSE: Piece = Piece::new(Color::Black, PieceKind::Horse);

    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// A cell on the grid. Row 0 is the top rank as drawn.
///
/// `row` is declared before `col` so the derived ordering walks the board
/// row by row.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { row, col }
    }
}

/// Board dimensions, only obtainable through validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub width: u8,
    pub height: u8,
}

impl BoardSize {
    pub fn new(width: u8, height: u8) -> Result<Self, GameError> {
        if !validate_board_size(width as i64) || !validate_board_size(height as i64) {
            return Err(malformed_dimension());
        }
        Ok(Self { width, height })
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.col < self.width && pos.row < self.height
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

pub fn validate_board_size(side: i64) -> bool {
    (MIN_BOARD_SIZE as i64..=MAX_BOARD_SIZE as i64).contains(&side)
}

/// Parses the answer to one of the board-size prompts.
pub fn parse_dimension(input: &str) -> Result<u8, GameError> {
    let side: i64 = input.trim().parse().map_err(|_| malformed_dimension())?;
    if !validate_board_size(side) {
        return Err(malformed_dimension());
    }
    Ok(side as u8)
}

fn malformed_dimension() -> GameError {
    GameError::MalformedDimension {
        min: MIN_BOARD_SIZE,
        max: MAX_BOARD_SIZE,
    }
}
