//! Move ordering: table move, MVV-LVA captures, killer, then quiet moves.

use std::cmp::Reverse;

use vantage_core::GameMove;

use crate::eval::piece_value;

/// Priority of the transposition table's recorded best move.
pub const TABLE_MOVE_PRIORITY: i32 = 100_000;

/// Base priority for captures, added to the MVV-LVA score.
pub const CAPTURE_BASE: i32 = 10_000;

/// Priority of the killer move for the current depth.
pub const KILLER_PRIORITY: i32 = 1;

/// Priority of every other move.
pub const QUIET_PRIORITY: i32 = 0;

/// Ordering class of a candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClass {
    /// Best move recorded in the table for this position.
    TableMove,
    /// A capture with its MVV-LVA score `10 * victim - attacker`.
    Capture(i32),
    /// The quiet move that last caused a cutoff at this depth.
    Killer,
    /// Anything else.
    Quiet,
}

impl MoveClass {
    /// Sort key; higher is searched first.
    ///
    /// | Class      | Priority            |
    /// |------------|---------------------|
    /// | TableMove  | 100,000             |
    /// | Capture    | 10,000 + MVV-LVA    |
    /// | Killer     | 1                   |
    /// | Quiet      | 0                   |
    #[inline]
    pub const fn priority(self) -> i32 {
        match self {
            MoveClass::TableMove => TABLE_MOVE_PRIORITY,
            MoveClass::Capture(mvv_lva) => CAPTURE_BASE + mvv_lva,
            MoveClass::Killer => KILLER_PRIORITY,
            MoveClass::Quiet => QUIET_PRIORITY,
        }
    }
}

/// Classify `mv` given the table's best move and the killer for this depth.
pub fn classify<M: GameMove>(mv: &M, table_move: Option<&M>, killer: Option<&M>) -> MoveClass {
    if table_move == Some(mv) {
        return MoveClass::TableMove;
    }
    if let Some(victim) = mv.captured_piece() {
        return MoveClass::Capture(10 * piece_value(victim) - piece_value(mv.moved_piece()));
    }
    if killer == Some(mv) {
        MoveClass::Killer
    } else {
        MoveClass::Quiet
    }
}

/// Sort `moves` by descending priority. Each move is classified once.
pub fn order_moves<M: GameMove>(moves: &mut [M], table_move: Option<&M>, killer: Option<&M>) {
    moves.sort_by_cached_key(|mv| Reverse(classify(mv, table_move, killer).priority()));
}

#[cfg(test)]
mod tests {
    use vantage_core::{ChessBoard, Move, PieceKind, Position};

    use super::*;

    fn find(board: &ChessBoard, uci: &str) -> Move {
        board.parse_uci_move(uci).expect("legal move")
    }

    #[test]
    fn pawn_takes_queen_outranks_queen_takes_pawn() {
        let pxq = 10 * piece_value(PieceKind::Queen) - piece_value(PieceKind::Pawn);
        let qxp = 10 * piece_value(PieceKind::Pawn) - piece_value(PieceKind::Queen);
        assert!(MoveClass::Capture(pxq).priority() > MoveClass::Capture(qxp).priority());
    }

    #[test]
    fn class_priorities_are_strictly_ordered() {
        // Worst possible capture: pawn victim, king attacker.
        let worst = 10 * piece_value(PieceKind::Pawn) - piece_value(PieceKind::King);
        assert!(MoveClass::TableMove.priority() > MoveClass::Capture(10 * 900).priority());
        assert!(MoveClass::Capture(worst).priority() > MoveClass::Killer.priority());
        assert!(MoveClass::Killer.priority() > MoveClass::Quiet.priority());
    }

    #[test]
    fn classify_capture_uses_mvv_lva() {
        // White queen on d4 can take the pawn on e5.
        let board = ChessBoard::from_fen("4k3/8/8/4p3/3Q4/8/8/4K3 w - - 0 1").unwrap();
        let qxp = find(&board, "d4e5");
        assert_eq!(classify(&qxp, None, None), MoveClass::Capture(100 - 90));
    }

    #[test]
    fn killer_is_ignored_for_captures() {
        let board = ChessBoard::from_fen("4k3/8/8/4p3/3Q4/8/8/4K3 w - - 0 1").unwrap();
        let qxp = find(&board, "d4e5");
        assert!(matches!(classify(&qxp, None, Some(&qxp)), MoveClass::Capture(_)));
    }

    #[test]
    fn table_move_comes_first() {
        let board = ChessBoard::new();
        let mut moves = board.legal_moves(false);
        let table_move = find(&board, "g1f3");
        order_moves(&mut moves, Some(&table_move), None);
        assert_eq!(moves[0], table_move);
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn captures_before_killer_before_quiet() {
        let board = ChessBoard::from_fen("4k3/8/8/4p3/3Q4/8/8/4K3 w - - 0 1").unwrap();
        let mut moves = board.legal_moves(false);
        let killer = find(&board, "e1f2");
        order_moves(&mut moves, None, Some(&killer));

        assert!(moves[0].is_capture(), "capture should be searched first");
        assert_eq!(moves[1], killer);
        assert!(moves[2..].iter().all(|mv| !mv.is_capture()));
    }

    #[test]
    fn most_valuable_victim_first() {
        // The d4 knight can take either the rook on e6 or the pawn on c6.
        let board = ChessBoard::from_fen("4k3/8/2p1r3/8/3N4/8/8/6K1 w - - 0 1").unwrap();
        let mut moves = board.legal_moves(true);
        order_moves(&mut moves, None, None);
        assert_eq!(moves[0], find(&board, "d4e6"));
        assert_eq!(moves[1], find(&board, "d4c6"));
    }
}
