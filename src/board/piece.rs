use serde::{Deserialize, Serialize};

use super::{Board, Square};

/// The two sides. White starts on rows 0-1 and its pawns move toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    fn pawn_row(self) -> usize {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    fn forward(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const PAWN_VAL: u32 = 1;
pub const KNIGHT_VAL: u32 = 3;
pub const BISHOP_VAL: u32 = 3;
pub const ROOK_VAL: u32 = 5;
pub const QUEEN_VAL: u32 = 9;
pub const KING_VAL: u32 = 200;

const ROOK_RAYS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];
const BISHOP_RAYS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const QUEEN_RAYS: [(i32, i32); 8] = [
    (1, 1), (1, -1), (-1, 1), (-1, -1),
    (1, 0), (-1, 0), (0, -1), (0, 1),
];
const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (-2, -1), (-2, 1), (2, -1), (2, 1),
    (-1, -2), (-1, 2), (1, -2), (1, 2),
];
const KING_STEPS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

impl PieceKind {
    /// Material value used by the evaluator.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => PAWN_VAL,
            PieceKind::Knight => KNIGHT_VAL,
            PieceKind::Bishop => BISHOP_VAL,
            PieceKind::Rook => ROOK_VAL,
            PieceKind::Queen => QUEEN_VAL,
            PieceKind::King => KING_VAL,
        }
    }

    fn rays(self) -> &'static [(i32, i32)] {
        match self {
            PieceKind::Rook => &ROOK_RAYS,
            PieceKind::Bishop => &BISHOP_RAYS,
            PieceKind::Queen => &QUEEN_RAYS,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self { Self { kind, side } }

    pub fn kind(self) -> PieceKind { self.kind }
    pub fn side(self) -> Side { self.side }
    pub fn value(self) -> u32 { self.kind.value() }

    /// Display glyph, hollow for white and filled for black.
    pub fn glyph(self) -> char {
        match (self.kind, self.side) {
            (PieceKind::Pawn, Side::White) => '♙',
            (PieceKind::Knight, Side::White) => '♘',
            (PieceKind::Bishop, Side::White) => '♗',
            (PieceKind::Rook, Side::White) => '♖',
            (PieceKind::Queen, Side::White) => '♕',
            (PieceKind::King, Side::White) => '♔',
            (PieceKind::Pawn, Side::Black) => '♟',
            (PieceKind::Knight, Side::Black) => '♞',
            (PieceKind::Bishop, Side::Black) => '♝',
            (PieceKind::Rook, Side::Black) => '♜',
            (PieceKind::Queen, Side::Black) => '♛',
            (PieceKind::King, Side::Black) => '♚',
        }
    }

    /// Non-zero byte identifying kind and side; 0 is reserved for an empty cell.
    pub(crate) fn code(self) -> u8 {
        let k = self.kind as u8 + 1;
        match self.side {
            Side::White => k,
            Side::Black => k | 0x10,
        }
    }

    #[inline]
    fn is_opponent(self, other: Option<Piece>) -> bool {
        matches!(other, Some(p) if p.side != self.side)
    }

    /// Empty or held by the other side.
    #[inline]
    fn can_land(self, board: &Board, sq: Square) -> bool {
        match board.piece_at(sq) {
            None => true,
            Some(p) => p.side != self.side,
        }
    }

    /// Feeds each pseudo-legal destination of this piece standing on `from` to `f`.
    pub fn generate<F: FnMut(Square)>(self, from: Square, board: &Board, mut f: F) {
        match self.kind {
            PieceKind::Pawn => self.pawn_moves(from, board, &mut f),
            PieceKind::Knight => self.step_moves(from, board, &KNIGHT_JUMPS, &mut f),
            PieceKind::King => self.step_moves(from, board, &KING_STEPS, &mut f),
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => self.ray_moves(from, board, &mut f),
        }
    }

    pub fn destinations(self, from: Square, board: &Board) -> Vec<Square> {
        let mut out = Vec::with_capacity(27);
        self.generate(from, board, |sq| out.push(sq));
        out
    }

    fn pawn_moves<F: FnMut(Square)>(self, from: Square, board: &Board, f: &mut F) {
        let dir = self.side.forward();
        let one = from.offset(dir, 0);

        if from.row() == self.side.pawn_row() {
            if let (Some(one), Some(two)) = (one, from.offset(2 * dir, 0)) {
                if board.is_empty(two) && board.is_empty(one) { f(two); }
            }
        }
        if let Some(one) = one {
            if board.is_empty(one) { f(one); }
        }
        // Diagonal captures only from non-edge rows.
        if from.row() > 0 && from.row() < 7 {
            for dc in [-1, 1] {
                if let Some(to) = from.offset(dir, dc) {
                    if self.is_opponent(board.piece_at(to)) { f(to); }
                }
            }
        }
    }

    fn step_moves<F: FnMut(Square)>(self, from: Square, board: &Board, offsets: &[(i32, i32)], f: &mut F) {
        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                if self.can_land(board, to) { f(to); }
            }
        }
    }

    fn ray_moves<F: FnMut(Square)>(self, from: Square, board: &Board, f: &mut F) {
        for &(dr, dc) in self.kind.rays() {
            let mut cur = from;
            while let Some(to) = cur.offset(dr, dc) {
                match board.piece_at(to) {
                    None => f(to),
                    Some(p) => {
                        if p.side != self.side { f(to); }
                        break;
                    }
                }
                cur = to;
            }
        }
    }
}
