//! Errors raised when building or driving a [`ChessBoard`](crate::ChessBoard).

/// Errors from FEN parsing and move input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The FEN string could not be parsed.
    #[error("invalid FEN \"{fen}\": {reason}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// Why parsing or validation failed.
        reason: String,
    },
    /// The move string is not a legal move in the current position.
    #[error("illegal or malformed move: {uci_move}")]
    IllegalMove {
        /// The UCI move string that was rejected.
        uci_move: String,
    },
}

#[cfg(test)]
mod tests {
    use super::BoardError;

    #[test]
    fn illegal_move_display() {
        let err = BoardError::IllegalMove {
            uci_move: "e2e5".to_string(),
        };
        assert_eq!(format!("{err}"), "illegal or malformed move: e2e5");
    }

    #[test]
    fn invalid_fen_display_includes_reason() {
        let err = BoardError::InvalidFen {
            fen: "bogus".to_string(),
            reason: "wrong field count".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid FEN \"bogus\": wrong field count");
    }
}
