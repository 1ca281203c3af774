//! Search algorithms and move ordering.

pub mod control;
pub mod heuristics;
pub mod negamax;
pub mod ordering;
pub mod tt;

use std::time::Duration;

use tracing::{debug, info, warn};
use vantage_core::Position;

use crate::config::SearchConfig;
use crate::eval::{Evaluator, MaterialMobility};
use control::SearchControl;
use heuristics::KillerTable;
use negamax::{INFINITY, MAX_DEPTH, SearchContext, SearchStats, negamax};
use tt::TranspositionTable;

/// How far and how long to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Time budget for this move. `None` searches to `max_depth`.
    pub budget: Option<Duration>,
    /// Deepest iteration to run.
    pub max_depth: u8,
}

impl SearchLimits {
    /// Search exactly to `depth`, ignoring the clock.
    pub fn depth(depth: u8) -> Self {
        Self {
            budget: None,
            max_depth: depth,
        }
    }

    /// Search until `budget` runs out, at most to `max_depth`.
    pub fn timed(budget: Duration, max_depth: u8) -> Self {
        Self {
            budget: Some(budget),
            max_depth,
        }
    }
}

/// Result of a search, or of the iterations completed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// Best move at the deepest completed iteration. `None` only when the
    /// root has no legal moves.
    pub best_move: Option<M>,
    /// Score of the deepest completed iteration, from the mover's side.
    pub score: i32,
    /// Depth of the deepest completed iteration.
    pub depth: u8,
    /// Nodes visited, quiescence included.
    pub nodes: u64,
    /// Static evaluations performed.
    pub evaluations: u64,
    /// Nodes answered directly from the transposition table.
    pub tt_hits: u64,
    /// Wall time spent.
    pub elapsed: Duration,
}

impl<M> SearchResult<M> {
    fn empty() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            evaluations: 0,
            tt_hits: 0,
            elapsed: Duration::ZERO,
        }
    }

    fn record(&mut self, stats: SearchStats, elapsed: Duration) {
        self.nodes = stats.nodes;
        self.evaluations = stats.evaluations;
        self.tt_hits = stats.tt_hits;
        self.elapsed = elapsed;
    }

    /// Nodes per second over the whole search.
    pub fn nps(&self) -> u64 {
        let micros = self.elapsed.as_micros().max(1);
        (u128::from(self.nodes) * 1_000_000 / micros) as u64
    }
}

/// Iterative-deepening searcher.
///
/// Owns the transposition table and killer moves; both persist across
/// searches until [`clear`](Self::clear).
pub struct Searcher<P: Position, E = MaterialMobility> {
    tt: TranspositionTable<P::Move>,
    killers: KillerTable<P::Move>,
    evaluator: E,
    config: SearchConfig,
}

impl<P: Position> Searcher<P> {
    /// Create a searcher with the default material and mobility evaluator.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, MaterialMobility)
    }
}

impl<P: Position> Default for Searcher<P> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<P: Position, E: Evaluator<P>> Searcher<P, E> {
    /// Create a searcher that scores positions with `evaluator`.
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        Self {
            tt: TranspositionTable::new(config.tt_bits),
            killers: KillerTable::new(),
            evaluator,
            config,
        }
    }

    /// Current settings.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the settings, rebuilding the table if its size changed.
    pub fn set_config(&mut self, config: SearchConfig) {
        if config.tt_bits != self.config.tt_bits {
            self.tt = TranspositionTable::new(config.tt_bits);
        }
        self.config = config;
    }

    /// Read-only view of the transposition table.
    pub fn table(&self) -> &TranspositionTable<P::Move> {
        &self.tt
    }

    /// Forget everything learned: table entries and killers.
    pub fn clear(&mut self) {
        self.tt.clear();
        self.killers.clear();
    }

    /// Pick a move with `remaining` on the clock.
    ///
    /// Spends `remaining / time_divisor` and returns the best move of the
    /// deepest completed iteration. Returns `None` only when `position`
    /// has no legal moves.
    pub fn choose_move(&mut self, position: &mut P, remaining: Duration) -> Option<P::Move> {
        let budget = remaining / self.config.time_divisor.max(1);
        let limits = SearchLimits::timed(budget, self.config.max_depth);
        self.search(position, limits, |_| {}).best_move
    }

    /// Run iterative deepening from depth 1 until the limits say stop.
    ///
    /// Depth 1 always runs. A further iteration starts only while the
    /// budget allows it (see [`crate::should_continue`]). After each
    /// iteration the root's table entry supplies the best move, provided it
    /// is legal here; `on_iter` then sees the result so far.
    ///
    /// `position` is left exactly as it was passed in.
    pub fn search<F>(&mut self, position: &mut P, limits: SearchLimits, mut on_iter: F) -> SearchResult<P::Move>
    where
        F: FnMut(&SearchResult<P::Move>),
    {
        let control = match limits.budget {
            Some(budget) => SearchControl::new_timed(budget),
            None => SearchControl::new_infinite(),
        };

        let root_moves = position.legal_moves(false);
        let mut result = SearchResult::empty();
        let Some(first) = root_moves.first() else {
            warn!("search called on a position with no legal moves");
            return result;
        };
        result.best_move = Some(first.clone());

        let max_depth = limits
            .max_depth
            .min(self.config.max_depth)
            .clamp(1, (MAX_DEPTH - 1) as u8);
        let root_fingerprint = position.fingerprint();

        let mut ctx = SearchContext {
            tt: &mut self.tt,
            killers: &mut self.killers,
            evaluator: &self.evaluator,
            draw_score: self.config.draw_score,
            stats: SearchStats::default(),
        };

        for depth in 1..=max_depth {
            if depth > 1 && !control.should_start_iteration() {
                break;
            }

            let score = negamax(position, i32::from(depth), 0, -INFINITY, INFINITY, &mut ctx);

            if let Some(entry) = ctx.tt.probe(root_fingerprint)
                && root_moves.contains(&entry.best_move)
            {
                result.best_move = Some(entry.best_move.clone());
            }
            result.score = score;
            result.depth = depth;
            result.record(ctx.stats, control.elapsed());

            debug!(
                depth,
                score,
                nodes = result.nodes,
                tt_hits = result.tt_hits,
                elapsed_ms = result.elapsed.as_millis() as u64,
                best = ?result.best_move,
                "iteration complete"
            );
            on_iter(&result);
        }

        info!(
            depth = result.depth,
            score = result.score,
            nodes = result.nodes,
            evaluations = result.evaluations,
            nps = result.nps(),
            "search finished"
        );
        result
    }
}
