//! Scoped make/undo.
//!
//! A guard applies a change to a [`Position`] on construction and reverts it
//! when dropped, so `break`, `return` and `?` inside the guarded scope can
//! never leave the position mutated.

use std::ops::{Deref, DerefMut};

use crate::position::Position;

/// Holds a move applied to a position; the move is undone on drop.
pub struct MoveGuard<'a, P: Position> {
    position: &'a mut P,
    mv: &'a P::Move,
}

impl<'a, P: Position> MoveGuard<'a, P> {
    /// Apply `mv` to `position`.
    #[inline]
    pub fn new(position: &'a mut P, mv: &'a P::Move) -> Self {
        position.make_move(mv);
        Self { position, mv }
    }
}

impl<P: Position> Deref for MoveGuard<'_, P> {
    type Target = P;

    #[inline]
    fn deref(&self) -> &P {
        self.position
    }
}

impl<P: Position> DerefMut for MoveGuard<'_, P> {
    #[inline]
    fn deref_mut(&mut self) -> &mut P {
        self.position
    }
}

impl<P: Position> Drop for MoveGuard<'_, P> {
    #[inline]
    fn drop(&mut self) {
        self.position.undo_move(self.mv);
    }
}

/// Holds a passed turn; the turn is restored on drop.
pub struct SkipTurnGuard<'a, P: Position> {
    position: &'a mut P,
}

impl<'a, P: Position> SkipTurnGuard<'a, P> {
    /// Pass the turn, or return `None` if the position refuses to.
    #[inline]
    pub fn try_new(position: &'a mut P) -> Option<Self> {
        if position.try_skip_turn() {
            Some(Self { position })
        } else {
            None
        }
    }
}

impl<P: Position> Deref for SkipTurnGuard<'_, P> {
    type Target = P;

    #[inline]
    fn deref(&self) -> &P {
        self.position
    }
}

impl<P: Position> DerefMut for SkipTurnGuard<'_, P> {
    #[inline]
    fn deref_mut(&mut self) -> &mut P {
        self.position
    }
}

impl<P: Position> Drop for SkipTurnGuard<'_, P> {
    #[inline]
    fn drop(&mut self) {
        self.position.undo_skip_turn();
    }
}
