//! Board squares and occupancy sets using Little-Endian Rank-File (LERF) encoding.

use std::fmt;

/// A square on the chess board, encoded as a `u8` in LERF format.
///
/// Index = rank * 8 + file, so A1 = 0, B1 = 1, ..., H8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let &[file, rank] = s.as_bytes() else {
            return None;
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square((rank - b'1') * 8 + (file - b'a')))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based file (0 = a).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Zero-based rank (0 = rank 1).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }
}

impl From<shakmaty::Square> for Square {
    #[inline]
    fn from(sq: shakmaty::Square) -> Square {
        Square(sq as u8)
    }
}

impl From<Square> for shakmaty::Square {
    #[inline]
    fn from(sq: Square) -> shakmaty::Square {
        shakmaty::Square::new(u32::from(sq.0))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

/// A set of squares packed into a `u64`, one bit per square.
///
/// Iterating yields squares in ascending index order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// The empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Create a set from raw bits.
    #[inline]
    pub const fn new(bits: u64) -> SquareSet {
        SquareSet(bits)
    }

    /// Return the underlying bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Return `true` if no squares are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `sq` is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.0) != 0
    }
}

impl Iterator for SquareSet {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let sq = Square(self.0.trailing_zeros() as u8);
        self.0 &= self.0 - 1;
        Some(sq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl From<shakmaty::Bitboard> for SquareSet {
    #[inline]
    fn from(bb: shakmaty::Bitboard) -> SquareSet {
        SquareSet(bb.0)
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(*self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_roundtrip() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(e4.index(), 28);
        assert_eq!(format!("{e4}"), "e4");
        assert_eq!(Square::from_algebraic("a1").unwrap().index(), 0);
        assert_eq!(Square::from_algebraic("h8").unwrap().index(), 63);
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("a1b").is_none());
    }

    #[test]
    fn from_index_bounds() {
        assert!(Square::from_index(63).is_some());
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn shakmaty_square_roundtrip() {
        for i in 0u8..64 {
            let sq = Square::from_index(i).unwrap();
            let theirs: shakmaty::Square = sq.into();
            assert_eq!(Square::from(theirs), sq);
        }
    }

    #[test]
    fn set_iterates_in_index_order() {
        let set = SquareSet::new((1 << 3) | (1 << 17) | (1 << 63));
        let indices: Vec<usize> = set.map(Square::index).collect();
        assert_eq!(indices, vec![3, 17, 63]);
    }

    #[test]
    fn set_count_and_contains() {
        let set = SquareSet::new(0b1010);
        assert_eq!(set.count(), 2);
        assert!(set.contains(Square::from_index(1).unwrap()));
        assert!(!set.contains(Square::from_index(2).unwrap()));
        assert!(SquareSet::EMPTY.is_empty());
    }
}
