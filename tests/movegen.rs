use std::collections::HashSet;

use unimax::board::{Board, Move, Piece, PieceKind, Side, Square};
use unimax::perft::{perft, perft_divide};

fn sq(s: &str) -> Square { s.parse().expect("valid square") }

fn place(board: &mut Board, at: &str, kind: PieceKind, side: Side) {
    board.set(sq(at), Some(Piece::new(kind, side)));
}

fn dests(board: &Board, at: &str) -> HashSet<String> {
    let p = board.piece_at(sq(at)).expect("piece present");
    p.destinations(sq(at), board).into_iter().map(|s| s.to_string()).collect()
}

fn set_of(items: &[&str]) -> HashSet<String> { items.iter().map(|s| s.to_string()).collect() }

#[test]
fn rook_ray_stops_before_own_piece_and_on_first_enemy() {
    let mut b = Board::empty();
    place(&mut b, "d4", PieceKind::Rook, Side::White);
    place(&mut b, "d6", PieceKind::Pawn, Side::White);
    place(&mut b, "f4", PieceKind::Knight, Side::Black);
    place(&mut b, "g4", PieceKind::Queen, Side::Black);
    let got = dests(&b, "d4");
    let want = set_of(&["d5", "d3", "d2", "d1", "c4", "b4", "a4", "e4", "f4"]);
    assert_eq!(got, want);
    assert!(!got.contains("d6") && !got.contains("d7") && !got.contains("g4"));
}

#[test]
fn bishop_captures_exactly_the_first_opponent_on_a_diagonal() {
    let mut b = Board::empty();
    place(&mut b, "c1", PieceKind::Bishop, Side::White);
    place(&mut b, "e3", PieceKind::Pawn, Side::Black);
    place(&mut b, "f4", PieceKind::Pawn, Side::Black);
    place(&mut b, "b2", PieceKind::Pawn, Side::White);
    assert_eq!(dests(&b, "c1"), set_of(&["d2", "e3"]));
}

#[test]
fn queen_combines_rook_and_bishop_rays() {
    let mut b = Board::empty();
    place(&mut b, "a1", PieceKind::Queen, Side::Black);
    let got = dests(&b, "a1");
    assert_eq!(got.len(), 21);
    assert!(got.contains("h8") && got.contains("a8") && got.contains("h1"));
}

#[test]
fn queen_rays_stop_at_own_pieces_and_first_enemy() {
    let mut b = Board::empty();
    place(&mut b, "d4", PieceKind::Queen, Side::White);
    place(&mut b, "d6", PieceKind::Pawn, Side::White);
    place(&mut b, "f6", PieceKind::Knight, Side::Black);
    place(&mut b, "g7", PieceKind::Bishop, Side::Black);
    place(&mut b, "g4", PieceKind::Rook, Side::Black);
    place(&mut b, "h4", PieceKind::Knight, Side::Black);
    let want = set_of(&[
        "d5", "d3", "d2", "d1", "c4", "b4", "a4", "e4", "f4", "g4", "e5", "f6", "c5", "b6", "a7", "e3", "f2",
        "g1", "c3", "b2", "a1",
    ]);
    assert_eq!(dests(&b, "d4"), want);
}

#[test]
fn pawn_on_home_row_gets_single_and_double_advance() {
    let b = Board::startpos();
    assert_eq!(dests(&b, "e2"), set_of(&["e3", "e4"]));
    assert_eq!(dests(&b, "d7"), set_of(&["d6", "d5"]));
}

#[test]
fn pawn_double_advance_needs_both_squares_empty() {
    let mut b = Board::startpos();
    place(&mut b, "e4", PieceKind::Knight, Side::Black);
    assert_eq!(dests(&b, "e2"), set_of(&["e3"]));
    place(&mut b, "e3", PieceKind::Knight, Side::Black);
    assert!(dests(&b, "e2").is_empty());
}

#[test]
fn pawn_off_home_row_never_double_steps() {
    let mut b = Board::empty();
    place(&mut b, "c3", PieceKind::Pawn, Side::White);
    place(&mut b, "f5", PieceKind::Pawn, Side::Black);
    assert_eq!(dests(&b, "c3"), set_of(&["c4"]));
    assert_eq!(dests(&b, "f5"), set_of(&["f4"]));
}

#[test]
fn pawn_captures_diagonally_only_opponents() {
    let mut b = Board::empty();
    place(&mut b, "d4", PieceKind::Pawn, Side::White);
    place(&mut b, "c5", PieceKind::Rook, Side::Black);
    place(&mut b, "e5", PieceKind::Rook, Side::White);
    place(&mut b, "d5", PieceKind::Pawn, Side::Black);
    assert_eq!(dests(&b, "d4"), set_of(&["c5"]));
}

#[test]
fn pawn_on_last_row_has_no_moves() {
    let mut b = Board::empty();
    place(&mut b, "a8", PieceKind::Pawn, Side::White);
    place(&mut b, "b1", PieceKind::Pawn, Side::Black);
    assert!(dests(&b, "a8").is_empty());
    assert!(dests(&b, "b1").is_empty());
}

#[test]
fn knight_and_king_keep_in_bounds_non_friendly_targets() {
    let mut b = Board::empty();
    place(&mut b, "a1", PieceKind::Knight, Side::White);
    place(&mut b, "b3", PieceKind::Pawn, Side::White);
    place(&mut b, "c2", PieceKind::Pawn, Side::Black);
    assert_eq!(dests(&b, "a1"), set_of(&["c2"]));

    let mut b = Board::empty();
    place(&mut b, "h8", PieceKind::King, Side::Black);
    place(&mut b, "g8", PieceKind::Rook, Side::Black);
    place(&mut b, "g7", PieceKind::Rook, Side::White);
    assert_eq!(dests(&b, "h8"), set_of(&["h7", "g7"]));
}

#[test]
fn legal_moves_follow_row_major_piece_order() {
    let b = Board::startpos();
    let moves = b.legal_moves(Side::White);
    let froms: Vec<Square> = moves.iter().map(|m| m.from).collect();
    let mut sorted = froms.clone();
    sorted.sort();
    assert_eq!(froms, sorted);
    assert_eq!(moves[0], "b1a3".parse::<Move>().unwrap());
    assert_eq!(moves.len(), b.count_moves(Side::White));
}

#[test]
fn perft_startpos_small_depths() {
    let b = Board::startpos();
    assert_eq!(perft(&b, Side::White, 1), 20);
    assert_eq!(perft(&b, Side::White, 2), 400);
    let divided = perft_divide(&b, Side::White, 3);
    assert_eq!(divided.len(), 20);
    assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), perft(&b, Side::White, 3));
}
