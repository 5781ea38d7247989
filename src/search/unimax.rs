use std::collections::HashSet;

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{BoardSignature, Move, Side};
use crate::game::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Depth limit in plies; the root sits at depth 0.
    pub depth: u32,
}

impl Default for SearchParams {
    fn default() -> Self { Self { depth: crate::config::DEFAULT_DEPTH } }
}

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Highest value propagated up to the root.
    pub value: f64,
    pub nodes: u64,
    /// Nodes that stopped expanding siblings early.
    pub pruned: u64,
    /// Children dropped because their board was in the root's visited set.
    pub skipped: u64,
}

/// One frame of the search tree. Lives only for the duration of its recursive call.
struct Node<'a> {
    game: &'a GameState,
    /// Static score of the parent's state; `None` at the root.
    parent_score: Option<f64>,
    side: Side,
    depth: u32,
    value: f64,
    best_move: Option<Move>,
}

impl<'a> Node<'a> {
    fn new(game: &'a GameState, parent_score: Option<f64>, side: Side, depth: u32) -> Self {
        Self { game, parent_score, side, depth, value: 0.0, best_move: None }
    }

    fn is_leaf(&self, limit: u32) -> bool {
        self.depth == limit || self.game.is_game_over()
    }

    /// Compares static scores fixed at creation, not searched values.
    fn should_prune(&self) -> bool {
        matches!(self.parent_score, Some(p) if self.game.score() >= p)
    }

    /// Plain max over children, whoever is to move.
    fn absorb(&mut self, mv: Move, child_value: f64) {
        if child_value > self.value {
            self.value = child_value;
            self.best_move = Some(mv);
        }
    }
}

/// Depth-first unimax search. Every node keeps the largest value found
/// among its children; there is no min/max alternation between plies.
pub struct Searcher<R: Rng = SmallRng> {
    rng: R,
    nodes: u64,
    pruned: u64,
    skipped: u64,
}

impl Searcher<SmallRng> {
    pub fn seeded(seed: u64) -> Self { Self::with_rng(SmallRng::seed_from_u64(seed)) }

    pub fn from_entropy() -> Self { Self::with_rng(SmallRng::from_entropy()) }
}

impl<R: Rng> Searcher<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, nodes: 0, pruned: 0, skipped: 0 }
    }

    /// Searches from `root` with `side` to act. Returns no move when `side`
    /// has nothing to play.
    pub fn search(&mut self, root: &GameState, side: Side, params: SearchParams) -> SearchResult {
        self.nodes = 0;
        self.pruned = 0;
        self.skipped = 0;

        if root.count_legal_moves(side) == 0 {
            debug!("unimax: {:?} has no legal moves, skipping search", side);
            return SearchResult::default();
        }

        // Only read here; filled by whoever drives the game between plies.
        let visited = root.visited_set();
        let mut node = Node::new(root, None, side, 0);
        self.search_for_value(&mut node, params.depth, visited);

        debug!(
            "unimax: side={:?} depth={} best={} value={:.3} nodes={} pruned={} skipped={}",
            side,
            params.depth,
            node.best_move.map_or_else(|| "(none)".to_string(), |m| m.to_string()),
            node.value,
            self.nodes,
            self.pruned,
            self.skipped
        );
        SearchResult {
            best_move: node.best_move,
            value: node.value,
            nodes: self.nodes,
            pruned: self.pruned,
            skipped: self.skipped,
        }
    }

    fn search_for_value(&mut self, node: &mut Node<'_>, limit: u32, visited: &HashSet<BoardSignature>) {
        self.nodes += 1;
        if node.is_leaf(limit) {
            node.value = node.game.score();
            return;
        }
        let game = node.game;
        for (mv, child_game) in game.successors(node.side, &mut self.rng) {
            if !visited.is_empty() && visited.contains(&child_game.board().signature()) {
                self.skipped += 1;
                continue;
            }
            let mut child = Node::new(&child_game, Some(game.score()), node.side.opposite(), node.depth + 1);
            self.search_for_value(&mut child, limit, visited);
            node.absorb(mv, child.value);
            if node.should_prune() {
                self.pruned += 1;
                trace!("unimax: prune after {} at depth {} (static {:.3})", mv, node.depth, game.score());
                return;
            }
        }
    }
}
