use std::collections::HashSet;

use rand::Rng;

use crate::board::{Board, BoardSignature, Move, Piece, Side};
use crate::config::{EngineConfig, DEFAULT_MOBILITY_DENOMINATOR};
use crate::error::{Result, UnimaxError};
use crate::search::eval::unimax_score;
use crate::search::shuffle::shuffle_moves;
use crate::search::unimax::{SearchParams, Searcher};

/// Standard starting position with the default mobility denominator.
pub fn create_game() -> GameState {
    GameState::new()
}

/// A board together with its cached unimax score and the set of boards
/// the search should refuse to revisit.
///
/// The score is computed in full at construction and then only adjusted by
/// captured material in [`GameState::perform_move`]; the mobility part is
/// left as it was, so after a few moves it no longer matches a fresh
/// evaluation of the board.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    score: f64,
    denominator: f64,
    visited: HashSet<BoardSignature>,
}

impl Default for GameState {
    fn default() -> Self { Self::new() }
}

impl GameState {
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), DEFAULT_MOBILITY_DENOMINATOR)
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self::from_board(Board::startpos(), config.mobility_denominator)
    }

    pub fn from_board(board: Board, denominator: f64) -> Self {
        let score = unimax_score(&board, denominator);
        Self { board, score, denominator, visited: HashSet::new() }
    }

    pub fn board(&self) -> &Board { &self.board }

    /// Cached unimax score (see the type-level note on drift).
    pub fn score(&self) -> f64 { self.score }

    pub fn mobility_denominator(&self) -> f64 { self.denominator }

    pub fn legal_moves(&self, side: Side) -> Vec<Move> { self.board.legal_moves(side) }

    pub fn count_legal_moves(&self, side: Side) -> usize { self.board.count_moves(side) }

    /// Plays `mv` without any legality check and returns the captured piece, if any.
    /// Only the captured value is taken off the cached score.
    pub fn perform_move(&mut self, mv: Move) -> Option<Piece> {
        let captured = self.board.apply(mv);
        if let Some(p) = captured {
            self.score -= p.value() as f64;
        }
        captured
    }

    /// Like [`perform_move`](Self::perform_move) but rejects anything outside
    /// `side`'s pseudo-legal move list.
    pub fn play_checked(&mut self, side: Side, mv: Move) -> Result<Option<Piece>> {
        let mut legal = false;
        self.board.generate_moves(side, |m| legal |= m == mv);
        if !legal {
            return Err(UnimaxError::IllegalMove(mv));
        }
        Ok(self.perform_move(mv))
    }

    /// True once fewer than two kings remain.
    pub fn is_game_over(&self) -> bool { self.board.king_count() < 2 }

    /// Deep copy of the board with a freshly computed score and an empty visited set.
    pub fn fork(&self) -> Self {
        Self::from_board(self.board.clone(), self.denominator)
    }

    /// One forked state per legal move of `side`, in uniformly shuffled order.
    pub fn successors<R: Rng + ?Sized>(&self, side: Side, rng: &mut R) -> Successors<'_> {
        let mut moves = self.legal_moves(side);
        shuffle_moves(&mut moves, rng);
        Successors { parent: self, moves: moves.into_iter() }
    }

    pub fn random_move<R: Rng + ?Sized>(&self, side: Side, rng: &mut R) -> Option<Move> {
        let moves = self.legal_moves(side);
        if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
    }

    /// Best move for `side` searched to `depth` plies, with entropy-seeded move ordering.
    pub fn best_move(&self, side: Side, depth: u32) -> Option<Move> {
        Searcher::from_entropy().search(self, side, SearchParams { depth }).best_move
    }

    pub fn best_move_with<R: Rng>(&self, side: Side, depth: u32, rng: &mut R) -> Option<Move> {
        Searcher::with_rng(rng).search(self, side, SearchParams { depth }).best_move
    }

    pub fn remember_position(&mut self) {
        let sig = self.board.signature();
        self.visited.insert(sig);
    }

    pub fn remember_board(&mut self, board: &Board) {
        self.visited.insert(board.signature());
    }

    pub fn forget_positions(&mut self) { self.visited.clear(); }

    pub fn visited_count(&self) -> usize { self.visited.len() }

    pub(crate) fn visited_set(&self) -> &HashSet<BoardSignature> { &self.visited }
}

/// Lazily forks and plays each shuffled move; consumed once.
pub struct Successors<'a> {
    parent: &'a GameState,
    moves: std::vec::IntoIter<Move>,
}

impl Iterator for Successors<'_> {
    type Item = (Move, GameState);

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.moves.next()?;
        let mut child = self.parent.fork();
        child.perform_move(mv);
        Some((mv, child))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.moves.size_hint() }
}

impl ExactSizeIterator for Successors<'_> {}
