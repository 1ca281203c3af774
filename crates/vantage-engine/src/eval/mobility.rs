//! Mobility evaluation: legal-move count difference between the two sides.
//!
//! The opponent's moves are counted by passing the turn. When passing is not
//! possible (the side to move is in check) the term is zero.

use vantage_core::{Position, SkipTurnGuard};

/// Own legal-move count minus the opponent's.
pub fn mobility<P: Position>(position: &mut P) -> i32 {
    let ours = position.legal_moves(false).len() as i32;
    match SkipTurnGuard::try_new(position) {
        Some(passed) => ours - passed.legal_moves(false).len() as i32,
        None => 0,
    }
}
