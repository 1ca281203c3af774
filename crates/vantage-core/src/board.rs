//! [`ChessBoard`]: standard chess rules behind the [`Position`] interface.
//!
//! Move generation and legality come from `shakmaty`. This type adds what the
//! search needs on top of an immutable-style rules engine: an undo stack for
//! in-place make/undo, a Zobrist fingerprint kept alongside the position, a
//! hash history for repetition detection, and an absolute ply counter.

use shakmaty::fen::Fen;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, EnPassantMode, Move, Position as RulesPosition};
use tracing::warn;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::position::{GameMove, Position};
use crate::piece_kind::PieceKind;
use crate::square::{Square, SquareSet};

impl GameMove for Move {
    #[inline]
    fn moved_piece(&self) -> PieceKind {
        self.role().into()
    }

    #[inline]
    fn captured_piece(&self) -> Option<PieceKind> {
        self.capture().map(PieceKind::from)
    }
}

/// Format a move in UCI long algebraic notation (e.g. `e2e4`, `e7e8q`).
pub fn move_to_uci(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

/// State restored by an undo.
#[derive(Debug, Clone)]
struct Snapshot {
    position: Chess,
    hash: u64,
    ply: u32,
}

/// A chess position supporting in-place make/undo.
#[derive(Debug, Clone)]
pub struct ChessBoard {
    position: Chess,
    hash: u64,
    /// Snapshots pushed by `make_move` and `try_skip_turn`.
    undo: Vec<Snapshot>,
    /// Fingerprints of every position that preceded a played move.
    history: Vec<u64>,
    ply: u32,
}

impl ChessBoard {
    /// The standard starting position.
    pub fn new() -> Self {
        Self::from_chess(Chess::default())
    }

    /// Parse a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let invalid = |reason: String| BoardError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let parsed: Fen = fen.parse().map_err(|e| invalid(format!("{e}")))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;
        Ok(Self::from_chess(position))
    }

    fn from_chess(position: Chess) -> Self {
        let black_to_move = position.turn() == shakmaty::Color::Black;
        let ply = (position.fullmoves().get() - 1)
            .saturating_mul(2)
            .saturating_add(u32::from(black_to_move));
        let hash = zobrist(&position);
        Self {
            position,
            hash,
            undo: Vec::new(),
            history: Vec::new(),
            ply,
        }
    }

    /// Find the legal move matching a UCI string such as `e2e4`.
    pub fn parse_uci_move(&self, uci: &str) -> Result<Move, BoardError> {
        self.position
            .legal_moves()
            .into_iter()
            .find(|mv| move_to_uci(mv) == uci)
            .ok_or_else(|| BoardError::IllegalMove {
                uci_move: uci.to_string(),
            })
    }

    /// Parse and play a UCI move.
    pub fn play_uci(&mut self, uci: &str) -> Result<(), BoardError> {
        let mv = self.parse_uci_move(uci)?;
        self.make_move(&mv);
        Ok(())
    }

    /// Halfmoves since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u32 {
        self.position.halfmoves()
    }

    /// Whether the current position occurred earlier since the last
    /// irreversible move.
    pub fn is_repetition(&self) -> bool {
        self.history
            .iter()
            .rev()
            .take(self.halfmove_clock() as usize)
            .any(|&h| h == self.hash)
    }

    fn push_snapshot(&mut self) {
        self.undo.push(Snapshot {
            position: self.position.clone(),
            hash: self.hash,
            ply: self.ply,
        });
    }

    fn pop_snapshot(&mut self) -> bool {
        match self.undo.pop() {
            Some(snapshot) => {
                self.position = snapshot.position;
                self.hash = snapshot.hash;
                self.ply = snapshot.ply;
                true
            }
            None => {
                warn!("undo requested with an empty undo stack");
                false
            }
        }
    }
}

fn zobrist(position: &Chess) -> u64 {
    position.zobrist_hash::<Zobrist64>(EnPassantMode::Legal).0
}

impl Position for ChessBoard {
    type Move = Move;

    fn legal_moves(&self, captures_only: bool) -> Vec<Move> {
        let mut moves = self.position.legal_moves();
        if captures_only {
            moves.retain(|mv| mv.is_capture());
        }
        moves.into_iter().collect()
    }

    fn make_move(&mut self, mv: &Move) {
        self.push_snapshot();
        self.history.push(self.hash);
        self.position.play_unchecked(mv);
        self.hash = zobrist(&self.position);
        self.ply = self.ply.saturating_add(1);
    }

    fn undo_move(&mut self, _mv: &Move) {
        if self.pop_snapshot() {
            self.history.pop();
        }
    }

    fn is_in_check(&self) -> bool {
        self.position.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_draw(&self) -> bool {
        self.halfmove_clock() >= 100
            || self.position.is_insufficient_material()
            || self.position.is_stalemate()
            || self.is_repetition()
    }

    #[inline]
    fn fingerprint(&self) -> u64 {
        self.hash
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.board().piece_at(sq.into()).map(Piece::from)
    }

    fn occupied(&self) -> SquareSet {
        self.position.board().occupied().into()
    }

    fn side_to_move(&self) -> Color {
        self.position.turn().into()
    }

    fn try_skip_turn(&mut self) -> bool {
        match self.position.clone().swap_turn() {
            Ok(swapped) => {
                self.push_snapshot();
                self.position = swapped;
                self.hash = zobrist(&self.position);
                true
            }
            Err(_) => false,
        }
    }

    fn undo_skip_turn(&mut self) {
        self.pop_snapshot();
    }

    #[inline]
    fn ply_count(&self) -> u32 {
        self.ply
    }
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Two boards are equal when they hold the same position with the same
/// history and undo depth.
impl PartialEq for ChessBoard {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && self.ply == other.ply
            && self.undo.len() == other.undo.len()
            && self.history == other.history
            && self.position.turn() == other.position.turn()
            && self.position.board() == other.position.board()
    }
}
