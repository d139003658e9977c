pub mod model;
pub use model::{parse_dimension, validate_board_size, BoardSize, Color, Piece, PieceKind, Position};
pub use model::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

pub mod move_rules;
pub mod notation;

mod board;
#[cfg(test)]
pub mod test_utils;
pub use board::{initial_layout, Board};
