use std::io;

use thiserror::Error;

/// Failures reported by a [`ChessRules`](crate::ChessRules) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("invalid move: {0}")]
    InvalidMove(String),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to parse FEN '{fen}'")]
    InvalidFen {
        fen: String,
        #[source]
        source: RulesError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
