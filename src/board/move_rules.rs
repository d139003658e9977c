use super::{PieceKind, Position};

const TOWER_RANGE: u8 = 3;

fn distance(from: Position, to: Position) -> (u8, u8) {
    (from.col.abs_diff(to.col), from.row.abs_diff(to.row))
}

pub fn is_valid_king_move(from: Position, to: Position) -> bool {
    let (cols, rows) = distance(from, to);
    cols <= 1 && rows <= 1 && !(cols == 0 && rows == 0)
}

/// Straight or diagonal, one to three cells. Pieces in between do not block.
pub fn is_valid_tower_move(from: Position, to: Position) -> bool {
    let (cols, rows) = distance(from, to);
    let in_range = |steps: u8| (1..=TOWER_RANGE).contains(&steps);
    let straight = (cols == 0 && in_range(rows)) || (rows == 0 && in_range(cols));
    let diagonal = cols == rows && in_range(cols);
    straight || diagonal
}

pub fn is_valid_horse_move(from: Position, to: Position) -> bool {
    matches!(distance(from, to), (2, 1) | (1, 2))
}

/// Geometry only: occupancy, turn and bounds are checked by the caller.
pub fn is_legal_move(kind: PieceKind, from: Position, to: Position) -> bool {
    match kind {
        PieceKind::King => is_valid_king_move(from, to),
        PieceKind::Tower => is_valid_tower_move(from, to),
        PieceKind::Horse => is_valid_horse_move(from, to),
    }
}
