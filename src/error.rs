use thiserror::Error;

/// Failures at the text boundary of the bot. The search itself never fails.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal move '{0}' in this position")]
    IllegalMove(String),

    #[error("no legal moves in this position")]
    NoLegalMoves,

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
