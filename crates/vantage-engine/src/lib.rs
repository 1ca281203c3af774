//! Search and evaluation for vantage.

pub mod config;
pub mod eval;
pub mod search;
pub mod time;

pub use config::SearchConfig;
pub use eval::{Evaluator, MaterialMobility, evaluate};
pub use search::control::SearchControl;
pub use search::negamax::{INFINITY, MATE_SCORE, MATE_THRESHOLD, SearchStats, mate_in_moves};
pub use search::tt::{Bound, TranspositionTable, TtEntry};
pub use search::{SearchLimits, SearchResult, Searcher};
pub use time::{budget_from_clock, should_continue};
