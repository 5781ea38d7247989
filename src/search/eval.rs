use crate::board::{Board, Side};

/// Sum of the material value of every piece on the board, both sides.
pub fn material(board: &Board) -> u32 {
    board.pieces().map(|(_, p)| p.value()).sum()
}

/// Combined pseudo-legal move count of both sides.
pub fn mobility(board: &Board) -> usize {
    board.count_moves(Side::White) + board.count_moves(Side::Black)
}

/// Unimax score: total material plus total mobility scaled down by `denominator`.
/// Boards with a missing king score 0.
///
/// The score is side-agnostic; both players maximize the same number.
pub fn unimax_score(board: &Board, denominator: f64) -> f64 {
    if board.king_count() < 2 {
        return 0.0;
    }
    material(board) as f64 + mobility(board) as f64 / denominator
}
