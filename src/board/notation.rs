use super::{BoardSize, Position};
use crate::error::GameError;

/// Parses a square like "b3" into a grid position.
///
/// The file letter is case-insensitive. The rank is a single digit, so
/// ranks above 9 cannot be addressed even on taller boards.
pub fn decode(coord: &str, size: BoardSize) -> Result<Position, GameError> {
    let bytes = coord.as_bytes();
    if bytes.len() != 2 {
        return Err(GameError::InvalidCoordinates);
    }

    let file = bytes[0].to_ascii_uppercase();
    let rank = bytes[1];

    if file < b'A' || file >= b'A' + size.width {
        return Err(GameError::InvalidCoordinates);
    }
    if !rank.is_ascii_digit() || rank < b'1' || rank > b'0' + size.height {
        return Err(GameError::InvalidCoordinates);
    }

    Ok(Position::new(file - b'A', size.height - (rank - b'0')))
}

/// File letter for a column, 'A' on the left.
pub fn file_label(col: u8) -> char {
    (b'A' + col) as char
}

/// Rank number for a row; the bottom row is rank 1.
pub fn rank_label(row: u8, size: BoardSize) -> u8 {
    size.height - row
}

/// Label of a cell in human notation, e.g. "B3". Ranks above 9 come out
/// with two digits and are not accepted back by [`decode`].
pub fn encode(pos: Position, size: BoardSize) -> String {
    format!("{}{}", file_label(pos.col), rank_label(pos.row, size))
}
