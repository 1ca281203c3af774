//! Shared fixtures: a synthetic game tree and an unpruned reference search.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vantage_core::{Color, GameMove, Piece, PieceKind, Position, Square, SquareSet};
use vantage_engine::{Evaluator, MATE_SCORE};

/// An edge of the synthetic tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub capture: bool,
}

impl GameMove for Edge {
    fn moved_piece(&self) -> PieceKind {
        PieceKind::Knight
    }

    fn captured_piece(&self) -> Option<PieceKind> {
        self.capture.then_some(PieceKind::Pawn)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Node {
    pub value: i32,
    pub mated: bool,
    pub drawn: bool,
    pub children: Vec<Edge>,
}

/// A game tree without transpositions: every node has its own fingerprint.
#[derive(Debug, Clone)]
pub struct TreePosition {
    nodes: Vec<Node>,
    path: Vec<usize>,
}

impl TreePosition {
    /// Build a tree from explicit nodes; node 0 is the root.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes, path: vec![0] }
    }

    /// A random tree `height` levels deep.
    ///
    /// Roughly a third of the edges are captures. Below the root, a few
    /// nodes are checkmates or draws.
    pub fn random(seed: u64, height: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut nodes = vec![Node {
            value: rng.random_range(-100..=100),
            ..Node::default()
        }];
        let mut frontier = vec![(0usize, 0u32)];

        while let Some((parent, level)) = frontier.pop() {
            if level >= height {
                continue;
            }
            let min_children = if level == 0 { 2 } else { 0 };
            let count = rng.random_range(min_children..=4);
            for _ in 0..count {
                let index = nodes.len();
                let terminal = rng.random_range(0..20);
                nodes.push(Node {
                    value: rng.random_range(-100..=100),
                    mated: terminal == 0,
                    drawn: terminal == 1,
                    children: Vec::new(),
                });
                nodes[parent].children.push(Edge {
                    to: index,
                    capture: rng.random_bool(0.35),
                });
                frontier.push((index, level + 1));
            }
        }

        Self::from_nodes(nodes)
    }

    pub fn current(&self) -> usize {
        self.path.last().copied().unwrap_or(0)
    }

    fn node(&self) -> &Node {
        &self.nodes[self.current()]
    }
}

impl Position for TreePosition {
    type Move = Edge;

    fn legal_moves(&self, captures_only: bool) -> Vec<Edge> {
        self.node()
            .children
            .iter()
            .filter(|edge| !captures_only || edge.capture)
            .copied()
            .collect()
    }

    fn make_move(&mut self, mv: &Edge) {
        self.path.push(mv.to);
    }

    fn undo_move(&mut self, _mv: &Edge) {
        self.path.pop();
    }

    fn is_in_check(&self) -> bool {
        false
    }

    fn is_checkmate(&self) -> bool {
        self.node().mated
    }

    fn is_draw(&self) -> bool {
        self.node().drawn
    }

    fn fingerprint(&self) -> u64 {
        (self.current() as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    fn piece_at(&self, _sq: Square) -> Option<Piece> {
        None
    }

    fn occupied(&self) -> SquareSet {
        SquareSet::EMPTY
    }

    fn side_to_move(&self) -> Color {
        if self.path.len() % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    fn try_skip_turn(&mut self) -> bool {
        false
    }

    fn undo_skip_turn(&mut self) {}

    fn ply_count(&self) -> u32 {
        (self.path.len() - 1) as u32
    }
}

/// Reads the static value stored on the current node.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeValue;

impl Evaluator<TreePosition> for NodeValue {
    fn evaluate(&self, position: &mut TreePosition) -> i32 {
        position.node().value
    }
}

/// Plain negamax without pruning or table, with the same node semantics
/// as the real search: terminal checks below the root, standing pat in
/// quiescence, and the static value at stalemate.
pub fn reference_negamax<P, E>(position: &mut P, evaluator: &E, depth: i32, ply: u32, draw_score: i32) -> i32
where
    P: Position,
    E: Evaluator<P>,
{
    if ply > 0 {
        if position.is_draw() {
            return draw_score;
        }
        if position.is_checkmate() {
            return position.ply_count() as i32 - MATE_SCORE;
        }
    }

    if depth <= 0 {
        let moves = position.legal_moves(!position.is_in_check());
        let mut best = evaluator.evaluate(position);
        for mv in &moves {
            position.make_move(mv);
            best = best.max(-reference_negamax(position, evaluator, depth - 1, ply + 1, draw_score));
            position.undo_move(mv);
        }
        return best;
    }

    let moves = position.legal_moves(false);
    if moves.is_empty() {
        return evaluator.evaluate(position);
    }
    let mut best = i32::MIN;
    for mv in &moves {
        position.make_move(mv);
        best = best.max(-reference_negamax(position, evaluator, depth - 1, ply + 1, draw_score));
        position.undo_move(mv);
    }
    best
}
