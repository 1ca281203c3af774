//! Core chess types and the position interface consumed by the search.

mod board;
mod color;
mod error;
mod guard;
mod piece;
mod piece_kind;
mod position;
mod square;

pub use board::{ChessBoard, move_to_uci};
pub use color::Color;
pub use error::BoardError;
pub use guard::{MoveGuard, SkipTurnGuard};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{GameMove, Position};
pub use square::{Square, SquareSet};

/// Move type produced by [`ChessBoard`].
pub use shakmaty::Move;
