use thiserror::Error;

/// Every way a line of player input can be turned down.
///
/// The `Display` text is what the player sees, so keep it short and exact.
/// None of these are fatal: the session reports the message and carries on
/// with its state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid input. Please enter a number between {min} and {max}.")]
    MalformedDimension { min: u8, max: u8 },
    #[error("Invalid coordinates.")]
    InvalidCoordinates,
    #[error("No piece at the source coordinate.")]
    NoPiece,
    #[error("It's White's turn. You can only move white pieces.")]
    WrongTurnWhite,
    #[error("It's Black's turn. You can only move black pieces.")]
    WrongTurnBlack,
    /// Never produced while `PieceKind` stays a closed enum.
    #[error("Unknown piece type.")]
    UnknownPieceKind,
    #[error("Invalid move for this piece type.")]
    IllegalMove,
    #[error("Cannot capture your own piece.")]
    SelfCapture,
    #[error("Usage: move <from> <to>")]
    MoveUsage,
    #[error("Unknown command. Type 'help' for available commands.")]
    UnknownCommand,
    #[error("The game is over. Type 'restart' to play again or 'exit' to quit.")]
    GameOver,
}
