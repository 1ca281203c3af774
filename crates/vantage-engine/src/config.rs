//! Tunable search settings.

/// Settings shared by the search and the host.
///
/// The host adjusts these at runtime (UCI `setoption`); changes to
/// `tt_bits` take effect when the table is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// The transposition table holds `2^tt_bits` slots.
    pub tt_bits: u8,
    /// Score returned for drawn positions inside the tree. Slightly negative
    /// so the engine steers away from draws.
    pub draw_score: i32,
    /// Fraction of the remaining clock spent on one move: `remaining / time_divisor`.
    pub time_divisor: u32,
    /// Hard cap on iterative-deepening depth.
    pub max_depth: u8,
    /// Depth searched when the host gives neither a clock nor a depth.
    pub default_depth: u8,
}

impl SearchConfig {
    /// Largest accepted `tt_bits`.
    pub const MAX_TT_BITS: u8 = 30;
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tt_bits: 20,
            draw_score: -10,
            time_divisor: 50,
            max_depth: 64,
            default_depth: 5,
        }
    }
}
