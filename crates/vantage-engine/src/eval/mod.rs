//! Static evaluation.
//!
//! Scores are always from the side to move's perspective: positive means
//! the player about to move is better off.

pub mod material;
pub mod mobility;

use vantage_core::Position;

pub use material::{PIECE_VALUES, material, piece_value};
pub use mobility::mobility;

/// Scores a position for the side to move.
///
/// Takes the position mutably so implementations may probe it (e.g. pass
/// the turn), but it must be left exactly as it was found.
pub trait Evaluator<P: Position> {
    /// Evaluate `position` from the side to move's perspective.
    fn evaluate(&self, position: &mut P) -> i32;
}

/// Material balance plus mobility difference.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialMobility;

impl<P: Position> Evaluator<P> for MaterialMobility {
    #[inline]
    fn evaluate(&self, position: &mut P) -> i32 {
        evaluate(position)
    }
}

/// Evaluate `position` with material and mobility.
pub fn evaluate<P: Position>(position: &mut P) -> i32 {
    material(position) + mobility(position)
}
