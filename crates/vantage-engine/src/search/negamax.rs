//! Negamax alpha-beta search with quiescence.

use tracing::trace;
use vantage_core::{GameMove, MoveGuard, Position};

use crate::eval::Evaluator;
use crate::search::heuristics::KillerTable;
use crate::search::ordering::order_moves;
use crate::search::tt::{Bound, TranspositionTable, TtEntry};

/// Score representing an unreachable upper/lower bound.
pub const INFINITY: i32 = 100_000_000;

/// Base score for checkmate. A mated side scores `ply_count - MATE_SCORE`,
/// so mates reached sooner are worth more to the mating side.
pub const MATE_SCORE: i32 = 1_000_000;

/// Scores whose magnitude reaches this threshold indicate a forced mate.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 100_000;

/// Maximum search depth, for killer table sizing.
pub const MAX_DEPTH: usize = 128;

/// Counters accumulated over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, quiescence included.
    pub nodes: u64,
    /// Static evaluations performed.
    pub evaluations: u64,
    /// Nodes answered directly from the transposition table.
    pub tt_hits: u64,
}

/// Search state threaded through negamax calls.
pub(super) struct SearchContext<'a, M, E> {
    /// Transposition table owned by the searcher.
    pub tt: &'a mut TranspositionTable<M>,
    /// Killer moves owned by the searcher.
    pub killers: &'a mut KillerTable<M>,
    /// Static evaluator.
    pub evaluator: &'a E,
    /// Score of a drawn position inside the tree.
    pub draw_score: i32,
    /// Counters for this search.
    pub stats: SearchStats,
}

impl<M, E> SearchContext<'_, M, E> {
    fn evaluate<P>(&mut self, position: &mut P) -> i32
    where
        P: Position<Move = M>,
        E: Evaluator<P>,
    {
        self.stats.evaluations += 1;
        self.evaluator.evaluate(position)
    }
}

/// Negamax alpha-beta search.
///
/// `depth` is the remaining depth; at `depth <= 0` the node is a
/// quiescence node. `ply` is the distance from the root. Returns the score
/// for the side to move.
pub(super) fn negamax<P, E>(
    position: &mut P,
    depth: i32,
    ply: u32,
    alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_, P::Move, E>,
) -> i32
where
    P: Position,
    E: Evaluator<P>,
{
    ctx.stats.nodes += 1;

    // The root is playable by contract; terminal checks start below it.
    if ply > 0 {
        if position.is_draw() {
            return ctx.draw_score;
        }
        if position.is_checkmate() {
            return position.ply_count() as i32 - MATE_SCORE;
        }
    }

    let fingerprint = position.fingerprint();
    let mut table_move = None;
    if let Some(entry) = ctx.tt.probe(fingerprint) {
        if let Some(score) = entry.cutoff_score(depth, alpha, beta) {
            ctx.stats.tt_hits += 1;
            return score;
        }
        table_move = Some(entry.best_move.clone());
    }

    if depth <= 0 {
        return quiesce(position, depth, ply, alpha, beta, table_move.as_ref(), ctx);
    }

    let mut moves = position.legal_moves(false);
    if moves.is_empty() {
        // Checkmate was handled above, so this is stalemate.
        return ctx.evaluate(position);
    }

    let killer = ctx.killers.get(depth).cloned();
    order_moves(&mut moves, table_move.as_ref(), killer.as_ref());

    let original_alpha = alpha;
    let mut alpha = alpha;
    let mut best_score = -INFINITY;
    let mut best_move = None;

    for mv in &moves {
        let score = {
            let mut child = MoveGuard::new(position, mv);
            -negamax(&mut *child, depth - 1, ply + 1, -beta, -alpha, ctx)
        };

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(best_score);
        if alpha >= beta {
            break;
        }
    }

    if let Some(best_move) = best_move {
        let bound = if best_score < original_alpha {
            Bound::UpperBound
        } else if best_score >= beta {
            if !best_move.is_capture() {
                ctx.killers.store(depth, best_move.clone());
            }
            Bound::LowerBound
        } else {
            Bound::Exact
        };

        ctx.tt.store(TtEntry {
            fingerprint,
            best_move: best_move.clone(),
            score: best_score,
            depth: u8::try_from(depth).unwrap_or(u8::MAX),
            bound,
        });
    }

    best_score
}

/// Quiescence search: captures only (all moves while in check) until the
/// position is quiet.
///
/// Fail-soft with the standing pat as the floor. Never writes to the table.
fn quiesce<P, E>(
    position: &mut P,
    depth: i32,
    ply: u32,
    mut alpha: i32,
    beta: i32,
    table_move: Option<&P::Move>,
    ctx: &mut SearchContext<'_, P::Move, E>,
) -> i32
where
    P: Position,
    E: Evaluator<P>,
{
    let captures_only = !position.is_in_check();
    let mut moves = position.legal_moves(captures_only);

    // Stand-pat: the side to move can choose not to capture
    let stand_pat = ctx.evaluate(position);
    if stand_pat >= beta {
        return stand_pat;
    }
    alpha = alpha.max(stand_pat);

    if moves.is_empty() {
        return stand_pat;
    }

    order_moves(&mut moves, table_move, None);
    trace!(ply, depth, moves = moves.len(), "quiescence");

    let mut best_score = stand_pat;
    for mv in &moves {
        let score = {
            let mut child = MoveGuard::new(position, mv);
            -negamax(&mut *child, depth - 1, ply + 1, -beta, -alpha, ctx)
        };

        best_score = best_score.max(score);
        alpha = alpha.max(best_score);
        if alpha >= beta {
            break;
        }
    }

    best_score
}

/// Signed distance to mate in full moves, if `score` is a mate score.
///
/// Positive when the side to move mates, negative when it gets mated.
/// `root_ply` is the game ply of the searched position.
pub fn mate_in_moves(score: i32, root_ply: u32) -> Option<i32> {
    if score.abs() < MATE_THRESHOLD {
        return None;
    }
    let mate_ply = i64::from(MATE_SCORE - score.abs());
    let plies = (mate_ply - i64::from(root_ply)).max(0) as i32;
    let moves = (plies + 1) / 2;
    Some(if score > 0 { moves } else { -moves })
}
