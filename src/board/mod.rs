pub mod piece;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnimaxError;
pub use piece::{Piece, PieceKind, Side};

pub const ROWS: usize = 8;
pub const COLS: usize = 8;

/// A board coordinate. Row 0 is the white back rank, column 0 is the a-file.
///
/// Serialized in coordinate notation (`"e2"`); deserialization goes through
/// the same bounds check as parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Panics when either coordinate falls outside the board.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < ROWS && col < COLS, "square ({row}, {col}) is off the board");
        Self { row: row as u8, col: col as u8 }
    }

    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if (0..ROWS as i32).contains(&row) && (0..COLS as i32).contains(&col) {
            Some(Self { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    pub fn row(self) -> usize { self.row as usize }
    pub fn col(self) -> usize { self.col as usize }

    /// Square reached by stepping `(dr, dc)` from here, if still on the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::try_new(self.row as i32 + dr, self.col as i32 + dc)
    }

    fn index(self) -> usize { self.row() * COLS + self.col() }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Square {
    type Err = UnimaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return Err(UnimaxError::InvalidSquare(s.to_string()));
        }
        Ok(Self { row: b[1] - b'1', col: b[0] - b'a' })
    }
}

impl TryFrom<String> for Square {
    type Error = UnimaxError;

    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self { sq.to_string() }
}

/// A (from, to) pair. The mover is looked up on the board when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self { Self { from, to } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = UnimaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(UnimaxError::InvalidMove(s.to_string()));
        }
        let from = s[0..2].parse().map_err(|_| UnimaxError::InvalidMove(s.to_string()))?;
        let to = s[2..4].parse().map_err(|_| UnimaxError::InvalidMove(s.to_string()))?;
        Ok(Self { from, to })
    }
}

/// Serialized occupancy of a board, one byte per square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSignature([u8; ROWS * COLS]);

/// Fixed 8x8 grid; each cell holds at most one piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self { Self::startpos() }
}

const BACK_RANK: [PieceKind; COLS] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self { Self { cells: [[None; COLS]; ROWS] } }

    /// Standard starting layout: white on rows 0-1, black mirrored on rows 6-7.
    pub fn startpos() -> Self {
        let mut board = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(kind, Side::White));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Side::White));
            board.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Side::Black));
            board.cells[7][col] = Some(Piece::new(kind, Side::Black));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> { self.cells[sq.row()][sq.col()] }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) { self.cells[sq.row()][sq.col()] = piece; }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool { self.piece_at(sq).is_none() }

    /// All occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| cell.map(|p| (Square::new(r, c), p)))
        })
    }

    pub fn king_count(&self) -> usize {
        self.pieces().filter(|(_, p)| p.value() == PieceKind::King.value()).count()
    }

    /// Feeds every pseudo-legal move of `side` to `f`, pieces in row-major order.
    pub fn generate_moves<F: FnMut(Move)>(&self, side: Side, mut f: F) {
        for (from, piece) in self.pieces() {
            if piece.side() != side { continue; }
            piece.generate(from, self, |to| f(Move::new(from, to)));
        }
    }

    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.generate_moves(side, |m| moves.push(m));
        moves
    }

    pub fn count_moves(&self, side: Side) -> usize {
        let mut ct = 0usize;
        self.generate_moves(side, |_| ct += 1);
        ct
    }

    /// Moves whatever stands on `mv.from` to `mv.to` and returns the overwritten piece.
    ///
    /// Panics if `mv.from` is empty.
    pub fn apply(&mut self, mv: Move) -> Option<Piece> {
        let mover = self.piece_at(mv.from);
        assert!(mover.is_some(), "no piece on {} to move", mv.from);
        let captured = self.piece_at(mv.to);
        self.set(mv.to, mover);
        self.set(mv.from, None);
        captured
    }

    pub fn signature(&self) -> BoardSignature {
        let mut sig = [0u8; ROWS * COLS];
        for (sq, piece) in self.pieces() {
            sig[sq.index()] = piece.code();
        }
        BoardSignature(sig)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in (0..ROWS).rev() {
            write!(f, "{} ", r + 1)?;
            for c in 0..COLS {
                let glyph = self.cells[r][c].map_or('.', Piece::glyph);
                write!(f, "{glyph}")?;
                if c + 1 < COLS { write!(f, " ")?; }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_notation_maps_row_zero_to_rank_one() {
        let sq: Square = "e2".parse().unwrap();
        assert_eq!((sq.row(), sq.col()), (1, 4));
        assert_eq!(sq.to_string(), "e2");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
    }

    #[test]
    fn move_parses_coordinate_notation() {
        let mv: Move = "g1f3".parse().unwrap();
        assert_eq!(mv.from, Square::new(0, 6));
        assert_eq!(mv.to, Square::new(2, 5));
        assert!("g1f".parse::<Move>().is_err());
    }

    #[test]
    fn serde_uses_checked_coordinate_notation() {
        let mv: Move = "e2e4".parse().unwrap();
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"from":"e2","to":"e4"}"#);
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);

        assert!(serde_json::from_str::<Square>(r#""e9""#).is_err());
        assert!(serde_json::from_str::<Square>(r#"{"row":12,"col":4}"#).is_err());
        assert!(serde_json::from_str::<Move>(r#"{"from":"e2","to":"z1"}"#).is_err());
    }

    #[test]
    #[should_panic]
    fn square_new_rejects_off_board() {
        let _ = Square::new(8, 0);
    }

    #[test]
    fn signature_tracks_occupancy() {
        let mut b = Board::startpos();
        let before = b.signature();
        b.apply("e2e4".parse().unwrap());
        assert_ne!(before, b.signature());
        assert_eq!(Board::startpos().signature(), before);
    }
}
