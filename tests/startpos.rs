use pretty_assertions::assert_eq;
use unimax::board::{Piece, PieceKind, Side, Square};
use unimax::create_game;

fn expected_at(row: usize, col: usize) -> Option<Piece> {
    use PieceKind::*;
    let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
    match row {
        0 => Some(Piece::new(back[col], Side::White)),
        1 => Some(Piece::new(Pawn, Side::White)),
        6 => Some(Piece::new(Pawn, Side::Black)),
        7 => Some(Piece::new(back[col], Side::Black)),
        _ => None,
    }
}

#[test]
fn every_square_matches_the_starting_layout() {
    let game = create_game();
    let mut actual = Vec::new();
    let mut expected = Vec::new();
    for r in 0..8 {
        for c in 0..8 {
            actual.push(game.board().piece_at(Square::new(r, c)));
            expected.push(expected_at(r, c));
        }
    }
    assert_eq!(actual, expected);
}

#[test]
fn startpos_renders_with_glyphs() {
    let text = create_game().board().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
    assert_eq!(lines[7], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖");
    assert_eq!(lines[8], "  a b c d e f g h");
}

#[test]
fn startpos_is_not_over_and_both_sides_have_twenty_moves() {
    let game = create_game();
    assert!(!game.is_game_over());
    assert_eq!(game.legal_moves(Side::White).len(), 20);
    assert_eq!(game.count_legal_moves(Side::Black), 20);
}
