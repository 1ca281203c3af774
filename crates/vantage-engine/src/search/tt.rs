//! Direct-mapped transposition table.
//!
//! A fixed power-of-two array of slots. The slot for a position is its
//! fingerprint masked to the table size; there is no probing or chaining and
//! a store always overwrites whatever the slot held. Every probe re-checks
//! the full 64-bit fingerprint, so a collision only ever costs a lost entry.
//!
//! Memory is allocated once in the constructor. Nothing allocates during
//! search.

use std::fmt;
use std::mem::size_of;

use crate::config::SearchConfig;

/// What a stored score says about the true value of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The stored score is exact (it fell inside the search window).
    Exact,
    /// The search failed high: the true score is at least the stored score.
    LowerBound,
    /// The search failed low: the true score is at most the stored score.
    UpperBound,
}

/// One table slot's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtEntry<M> {
    /// Full fingerprint of the position that produced this entry.
    pub fingerprint: u64,
    /// Best move found in that search.
    pub best_move: M,
    /// Score from the side to move's perspective.
    pub score: i32,
    /// Remaining depth the entry was searched to.
    pub depth: u8,
    /// How `score` relates to the true value.
    pub bound: Bound,
}

impl<M> TtEntry<M> {
    /// The score this entry proves for a node searched to `depth` with the
    /// window `(alpha, beta)`, if any.
    ///
    /// Requires the stored depth to be at least `depth`. An exact score
    /// always applies; a lower bound only at or above `beta`; an upper bound
    /// only at or below `alpha`.
    #[inline]
    pub fn cutoff_score(&self, depth: i32, alpha: i32, beta: i32) -> Option<i32> {
        if i32::from(self.depth) < depth {
            return None;
        }
        let usable = match self.bound {
            Bound::Exact => true,
            Bound::LowerBound => self.score >= beta,
            Bound::UpperBound => self.score <= alpha,
        };
        usable.then_some(self.score)
    }
}

/// Fixed-size, direct-mapped, always-replace transposition table.
pub struct TranspositionTable<M> {
    slots: Box<[Option<TtEntry<M>>]>,
    /// Index mask: `slots.len() - 1`.
    mask: u64,
}

impl<M> TranspositionTable<M> {
    /// Create a table with `2^bits` slots (capped at [`SearchConfig::MAX_TT_BITS`]).
    pub fn new(bits: u8) -> Self {
        let bits = bits.min(SearchConfig::MAX_TT_BITS);
        let len = 1usize << bits;
        let slots: Box<[Option<TtEntry<M>>]> = (0..len).map(|_| None).collect();
        Self {
            slots,
            mask: (len - 1) as u64,
        }
    }

    /// Largest `bits` whose table fits in `mb` megabytes (at least one slot).
    pub fn bits_for_megabytes(mb: usize) -> u8 {
        let bytes = mb.saturating_mul(1024 * 1024);
        let entries = (bytes / size_of::<Option<TtEntry<M>>>()).max(1);
        (entries.ilog2() as u8).min(SearchConfig::MAX_TT_BITS)
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a table has at least one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot a fingerprint maps to.
    #[inline]
    pub fn slot_index(&self, fingerprint: u64) -> usize {
        (fingerprint & self.mask) as usize
    }

    /// Look up the entry for `fingerprint`.
    ///
    /// Returns `None` on an empty slot or when the slot holds a different
    /// position.
    #[inline]
    pub fn probe(&self, fingerprint: u64) -> Option<&TtEntry<M>> {
        self.slots[self.slot_index(fingerprint)]
            .as_ref()
            .filter(|entry| entry.fingerprint == fingerprint)
    }

    /// Write `entry` into its slot, replacing the previous occupant.
    #[inline]
    pub fn store(&mut self, entry: TtEntry<M>) {
        let index = self.slot_index(entry.fingerprint);
        self.slots[index] = Some(entry);
    }

    /// Empty every slot, keeping the allocation.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| None);
    }
}

impl<M> fmt::Debug for TranspositionTable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("slots", &self.slots.len())
            .finish()
    }
}
