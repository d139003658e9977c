use super::{notation, Board, BoardSize, Piece};

/// Builds a board holding exactly the given pieces, addressed in human notation.
pub fn board_with(width: u8, height: u8, pieces: &[(&str, Piece)]) -> Board {
    let size = BoardSize::new(width, height).unwrap();
    let mut board = Board::empty(size);
    for (square, piece) in pieces {
        let pos = notation::decode(square, size).unwrap();
        board.place(pos, *piece);
    }
    board
}
