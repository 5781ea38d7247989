use crate::board::{Board, Move, Side};

/// Leaf count of the pseudo-legal move tree, sides alternating from `side`.
/// Positions with a captured king keep expanding.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    board.generate_moves(side, |m| {
        let mut child = board.clone();
        child.apply(m);
        nodes += perft(&child, side.opposite(), depth - 1);
    });
    nodes
}

/// Per-root-move breakdown of [`perft`], in generation order.
pub fn perft_divide(board: &Board, side: Side, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 { return Vec::new(); }
    board
        .legal_moves(side)
        .into_iter()
        .map(|m| {
            let mut child = board.clone();
            child.apply(m);
            (m, perft(&child, side.opposite(), depth - 1))
        })
        .collect()
}
