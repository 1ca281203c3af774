//! Killer move table for quiet move ordering.

use crate::search::negamax::MAX_DEPTH;

/// One killer per remaining depth: the last quiet move that caused a beta
/// cutoff at that depth.
///
/// Indexed by remaining depth, not by distance from the root. Entries are
/// overwritten by newer cutoffs and survive between searches.
#[derive(Debug, Clone)]
pub struct KillerTable<M> {
    slots: Vec<Option<M>>,
}

impl<M: PartialEq> KillerTable<M> {
    /// Create an empty killer table.
    pub fn new() -> Self {
        Self {
            slots: (0..MAX_DEPTH).map(|_| None).collect(),
        }
    }

    /// Record `mv` as the killer for `depth`. Out-of-range depths are ignored.
    pub fn store(&mut self, depth: i32, mv: M) {
        if let Some(slot) = Self::index(depth).and_then(|i| self.slots.get_mut(i)) {
            *slot = Some(mv);
        }
    }

    /// Killer recorded for `depth`, if any.
    pub fn get(&self, depth: i32) -> Option<&M> {
        Self::index(depth)
            .and_then(|i| self.slots.get(i))
            .and_then(Option::as_ref)
    }

    /// Forget every killer.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| None);
    }

    fn index(depth: i32) -> Option<usize> {
        usize::try_from(depth).ok().filter(|&d| d < MAX_DEPTH)
    }
}

impl<M: PartialEq> Default for KillerTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn killer_store_and_check() {
        let mut kt = KillerTable::new();
        kt.store(5, 12u16);
        assert_eq!(kt.get(5), Some(&12));
        assert_eq!(kt.get(4), None);
    }

    #[test]
    fn newer_cutoff_replaces_killer() {
        let mut kt = KillerTable::new();
        kt.store(3, 1u16);
        kt.store(3, 2u16);
        assert_eq!(kt.get(3), Some(&2));
    }

    #[test]
    fn out_of_range_depths_are_ignored() {
        let mut kt = KillerTable::new();
        kt.store(-1, 1u16);
        kt.store(MAX_DEPTH as i32, 2u16);
        assert_eq!(kt.get(-1), None);
        assert_eq!(kt.get(MAX_DEPTH as i32), None);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut kt = KillerTable::default();
        kt.store(1, 7u16);
        kt.clear();
        assert_eq!(kt.get(1), None);
    }
}
