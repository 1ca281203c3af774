//! UCI protocol errors.

use vantage_core::BoardError;

/// Errors that can occur during UCI protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// The FEN or a move in the `position` command was rejected.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// A `go` parameter was given without a value.
    #[error("missing value for go parameter {param}")]
    MissingGoValue {
        /// The parameter name.
        param: String,
    },

    /// A `go` parameter value could not be parsed.
    #[error("invalid value for go parameter {param}: {value}")]
    InvalidGoValue {
        /// The parameter name.
        param: String,
        /// The value that failed to parse.
        value: String,
    },

    /// `setoption` without `name` or `value`.
    #[error("malformed setoption command")]
    MalformedSetOption,

    /// `setoption` for an option the engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// An option value could not be parsed or is out of range.
    #[error("invalid value for option {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading commands or writing responses.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_errors_pass_through() {
        let err: UciError = BoardError::IllegalMove {
            uci_move: "e2e5".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "illegal or malformed move: e2e5");
    }

    #[test]
    fn go_value_display() {
        let err = UciError::InvalidGoValue {
            param: "depth".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for go parameter depth: abc");
    }
}
