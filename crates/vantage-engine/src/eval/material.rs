//! Material balance evaluation.
//!
//! Sums piece values over every occupied square, counting the side to move's
//! pieces as positive and the opponent's as negative.

use vantage_core::{PieceKind, Position};

/// Piece values indexed by [`PieceKind::index()`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   | 10    |
/// | Knight | 31    |
/// | Bishop | 33    |
/// | Rook   | 50    |
/// | Queen  | 90    |
/// | King   | 900   |
///
/// Both kings are always on the board, so the king value cancels out of the
/// balance; it only matters as an MVV-LVA attacker weight.
pub const PIECE_VALUES: [i32; PieceKind::COUNT] = [10, 31, 33, 50, 90, 900];

/// Value of a piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.index()]
}

/// Material balance from the side to move's perspective.
pub fn material<P: Position>(position: &P) -> i32 {
    let us = position.side_to_move();
    position
        .occupied()
        .filter_map(|sq| position.piece_at(sq))
        .map(|piece| {
            let value = piece_value(piece.kind);
            if piece.color == us { value } else { -value }
        })
        .sum()
}
