use std::collections::BTreeMap;

use super::{BoardSize, Piece, Position};

/// Sparse board: only occupied cells have an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    squares: BTreeMap<Position, Piece>,
}

/// Home ranks: Black along the top edge on the right, White along the bottom
/// edge on the left. Boards too small to hold them come back empty.
pub fn initial_layout(width: u8, height: u8) -> BTreeMap<Position, Piece> {
    let mut squares = BTreeMap::new();
    if width < 3 || height < 1 {
        return squares;
    }

    squares.insert(Position::new(width - 3, 0), Piece::BLACK_HORSE);
    squares.insert(Position::new(width - 2, 0), Piece::BLACK_TOWER);
    squares.insert(Position::new(width - 1, 0), Piece::BLACK_KING);

    squares.insert(Position::new(0, height - 1), Piece::WHITE_KING);
    squares.insert(Position::new(1, height - 1), Piece::WHITE_TOWER);
    squares.insert(Position::new(2, height - 1), Piece::WHITE_HORSE);
    squares
}

impl Board {
    /// Creates an empty board
    pub fn empty(size: BoardSize) -> Self {
        Self {
            size,
            squares: BTreeMap::new(),
        }
    }

    pub fn initial(size: BoardSize) -> Self {
        Self {
            size,
            squares: initial_layout(size.width, size.height),
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares.get(&pos).copied()
    }

    /// Puts `piece` on `pos`, handing back whatever stood there.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        self.squares.insert(pos, piece)
    }

    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.squares.remove(&pos)
    }

    pub fn render_to_string(&self) -> String {
        crate::ui::draw_board(self)
    }
}
