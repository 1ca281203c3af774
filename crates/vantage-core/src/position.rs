//! The position interface the search is written against.
//!
//! The search never generates or applies moves itself. Everything it needs
//! from the rules of the game goes through [`Position`], which mutates in
//! place: every [`make_move`](Position::make_move) must be matched by an
//! [`undo_move`](Position::undo_move) in strict LIFO order.

use std::fmt::Debug;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::{Square, SquareSet};

/// A move as seen by move ordering.
pub trait GameMove: Clone + Eq + Debug {
    /// Kind of the piece being moved.
    fn moved_piece(&self) -> PieceKind;

    /// Kind of the piece being captured, if any.
    fn captured_piece(&self) -> Option<PieceKind>;

    /// Whether this move captures a piece.
    #[inline]
    fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }
}

/// A mutable game position that can enumerate, apply and retract moves.
pub trait Position {
    /// Move type understood by this position.
    type Move: GameMove;

    /// Legal moves for the side to move, freshly generated.
    ///
    /// With `captures_only` set, only capturing moves are returned.
    fn legal_moves(&self, captures_only: bool) -> Vec<Self::Move>;

    /// Apply a legal move.
    fn make_move(&mut self, mv: &Self::Move);

    /// Retract the most recently applied move, which must be `mv`.
    fn undo_move(&mut self, mv: &Self::Move);

    /// Whether the side to move is in check.
    fn is_in_check(&self) -> bool;

    /// Whether the side to move is checkmated.
    fn is_checkmate(&self) -> bool;

    /// Whether the game is drawn in this position.
    fn is_draw(&self) -> bool;

    /// 64-bit identity of the position. Equal positions hash equally;
    /// distinct positions may rarely collide.
    fn fingerprint(&self) -> u64;

    /// The piece on `sq`, if any.
    fn piece_at(&self, sq: Square) -> Option<Piece>;

    /// Every occupied square.
    fn occupied(&self) -> SquareSet;

    /// The side whose turn it is.
    fn side_to_move(&self) -> Color;

    /// Pass the turn without moving. Returns `false` (and changes nothing)
    /// when passing is not possible, e.g. while in check.
    fn try_skip_turn(&mut self) -> bool;

    /// Undo a successful [`try_skip_turn`](Position::try_skip_turn).
    fn undo_skip_turn(&mut self);

    /// Number of half-moves played since the start of the game.
    fn ply_count(&self) -> u32;
}
