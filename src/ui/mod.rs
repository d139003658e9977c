use crate::board::notation::{file_label, rank_label};
use crate::board::{Board, Color, Piece, PieceKind, Position};
use lazy_static::lazy_static;
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub mod terminal;

// Glyphs for pieces
pub const WHITE_KING: char = '\u{2654}'; // ♔
pub const WHITE_TOWER: char = '\u{2656}'; // ♖
pub const WHITE_HORSE: char = '\u{2658}'; // ♘
pub const BLACK_KING: char = '\u{265A}'; // ♚
pub const BLACK_TOWER: char = '\u{265C}'; // ♜
pub const BLACK_HORSE: char = '\u{265E}'; // ♞
pub const EMPTY_CELL: char = ' ';

// Box drawing
const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';
const CROSS: char = '┼';
const LEFT_TEE: char = '├';
const RIGHT_TEE: char = '┤';
const TOP_TEE: char = '┬';
const BOTTOM_TEE: char = '┴';

const MARGIN: &str = "    ";
const CELL_RULE: &str = "───";

const BOX_PADDING: usize = 5;
/// Double-width markers that throw the box border off by one cell.
const WIDE_MARKERS: [&str; 2] = ["⬛", "⬜"];

pub fn piece_glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => WHITE_KING,
        (Color::White, PieceKind::Tower) => WHITE_TOWER,
        (Color::White, PieceKind::Horse) => WHITE_HORSE,
        (Color::Black, PieceKind::King) => BLACK_KING,
        (Color::Black, PieceKind::Tower) => BLACK_TOWER,
        (Color::Black, PieceKind::Horse) => BLACK_HORSE,
    }
}

/// Draws the grid with file letters on top and ranks counting down on the left.
pub fn draw_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();

    out.push_str(MARGIN);
    for col in 0..size.width {
        out.push_str(&format!("  {} ", file_label(col)));
    }
    out.push('\n');
    push_rule(&mut out, size.width, TOP_LEFT, TOP_TEE, TOP_RIGHT);

    for row in 0..size.height {
        if row > 0 {
            push_rule(&mut out, size.width, LEFT_TEE, CROSS, RIGHT_TEE);
        }
        out.push_str(&format!(" {:2} ", rank_label(row, size)));
        out.push(VERTICAL);
        for col in 0..size.width {
            let glyph = board
                .piece_at(Position::new(col, row))
                .map(piece_glyph)
                .unwrap_or(EMPTY_CELL);
            out.push_str(&format!(" {} ", glyph));
            out.push(VERTICAL);
        }
        out.push('\n');
    }

    push_rule(&mut out, size.width, BOTTOM_LEFT, BOTTOM_TEE, BOTTOM_RIGHT);
    out
}

fn push_rule(out: &mut String, width: u8, left: char, join: char, right: char) {
    out.push_str(MARGIN);
    out.push(left);
    for col in 0..width {
        out.push_str(CELL_RULE);
        out.push(if col + 1 < width { join } else { right });
    }
    out.push('\n');
}

/// Frames `msg` in a single-line box.
///
/// The border length follows the byte length of the message, which happens to
/// line up for the double-width emoji used in announcements; the square
/// markers need one more cell of padding on each side plus one trailing.
pub fn draw_box_message(msg: &str) -> String {
    let content_len = msg.len() + BOX_PADDING * 2;
    let (lead, trail) = if WIDE_MARKERS.iter().any(|marker| msg.contains(marker)) {
        (BOX_PADDING + 1, BOX_PADDING + 2)
    } else {
        (BOX_PADDING, BOX_PADDING)
    };
    let rule = HORIZONTAL.to_string().repeat(content_len);

    format!(
        "{}{}{}\n{}{}{}{}{}\n{}{}{}\n",
        TOP_LEFT,
        rule,
        TOP_RIGHT,
        VERTICAL,
        " ".repeat(lead),
        msg,
        " ".repeat(trail),
        VERTICAL,
        BOTTOM_LEFT,
        rule,
        BOTTOM_RIGHT
    )
}

#[derive(Tabled)]
struct CommandRow {
    #[tabled(rename = "Command")]
    command: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

lazy_static! {
    pub static ref HELP_MESSAGE: String = {
        let rows = vec![
            CommandRow {
                command: "move <from> <to>",
                description: "Move a piece (e.g. move B1 C3)",
            },
            CommandRow {
                command: "restart",
                description: "Restart the match",
            },
            CommandRow {
                command: "exit",
                description: "Exit the game",
            },
            CommandRow {
                command: "help",
                description: "Show this list",
            },
        ];
        format!("Available commands:\n{}", Table::new(rows).with(Style::modern()))
    };
}
