//! Type definitions for chess game logic
//!
//! Provides the small value types every other module is built on: side colour,
//! piece kind, the two-character piece code, and board coordinates.
//!
//! # Coordinate System
//!
//! Squares are addressed as `(row, col)`:
//! - row 0 = rank 8 (Black's back rank), row 7 = rank 1
//! - col 0 = file a, col 7 = file h
//!
//! So `e2` is `(6, 4)` and `e4` is `(4, 4)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side colour (also used to name the player to move)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Colour letter used in piece codes (`'w'` / `'b'`)
    pub fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Row delta of a single pawn step
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row pawns start on
    pub fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row the non-pawn pieces start on
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kind letter used in piece codes and FEN (lowercase)
    pub fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A coloured piece
///
/// Serialized as its two-character code (`"wp"`, `"bk"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Parse a two-character code such as `"wq"`
    ///
    /// Returns `None` for anything that isn't colour letter + kind letter.
    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let color = match chars.next()? {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return None,
        };
        let kind = PieceKind::from_code(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self { color, kind })
    }

    /// Two-character code (`"wp"`)
    pub fn code(self) -> String {
        format!("{}{}", self.color.code(), self.kind.code())
    }

    /// FEN letter: uppercase for White, lowercase for Black
    pub fn fen_char(self) -> char {
        let c = self.kind.code();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.code(), self.kind.code())
    }
}

impl Serialize for Piece {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code())
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Piece::from_code(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid piece code '{}'", code)))
    }
}

/// Board square `(row, col)`
///
/// Both components are always in `0..8`; the constructor panics otherwise
/// since an out-of-range coordinate is a caller bug, not a game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square from row/col indices
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let e4 = Square::new(4, 4);
    /// ```
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8, "Row must be in range 0-7");
        assert!(col < 8, "Col must be in range 0-7");
        Square { row, col }
    }

    /// Create a square from signed coordinates, `None` if off the board
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('a'..='h').contains(&file_char) {
            return None;
        }
        let rank = rank_char.to_digit(10)? as u8;
        if !(1..=8).contains(&rank) {
            return None;
        }
        Some(Square {
            row: 8 - rank,
            col: file_char as u8 - b'a',
        })
    }

    /// File letter ('a'..='h')
    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank number (1-8)
    pub fn rank_number(self) -> u8 {
        8 - self.row
    }

    /// Algebraic notation (e.g., "e4")
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_number())
    }

    /// Iterate all 64 squares in row-major order (a8 first)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    /// Signed `(row, col)` delta from `self` to `other`
    pub fn delta_to(self, other: Square) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// Chebyshev (king-move) distance
    pub fn chebyshev_distance(self, other: Square) -> u8 {
        let (dr, dc) = self.delta_to(other);
        dr.unsigned_abs().max(dc.unsigned_abs())
    }

    /// Straight-line distance between square centres
    pub fn euclidean_distance(self, other: Square) -> f64 {
        let (dr, dc) = self.delta_to(other);
        f64::from(dr).hypot(f64::from(dc))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_number())
    }
}

impl From<(u8, u8)> for Square {
    fn from((row, col): (u8, u8)) -> Self {
        Square::new(row, col)
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}

/// A completed half-move, immutable once appended to history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    /// The mover, as it stood on `from`
    pub piece: Piece,
    /// Piece removed by the move (the passed pawn for en passant)
    pub captured: Option<Piece>,
    pub timestamp: DateTime<Utc>,
}

impl ChessMove {
    pub fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            timestamp: Utc::now(),
        }
    }

    /// True for a pawn advancing two squares
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row.abs_diff(self.to.row) == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn test_piece_code_round_trip() {
        let piece = Piece::from_code("wq").unwrap();
        assert_eq!(piece, Piece::new(Color::White, PieceKind::Queen));
        assert_eq!(piece.code(), "wq");
        assert_eq!(piece.to_string(), "wq");
    }

    #[test]
    fn test_piece_code_rejects_garbage() {
        assert_eq!(Piece::from_code(""), None);
        assert_eq!(Piece::from_code("w"), None);
        assert_eq!(Piece::from_code("xq"), None);
        assert_eq!(Piece::from_code("wz"), None);
        assert_eq!(Piece::from_code("wqq"), None);
    }

    #[test]
    fn test_fen_char() {
        assert_eq!(Piece::new(Color::White, PieceKind::Knight).fen_char(), 'N');
        assert_eq!(Piece::new(Color::Black, PieceKind::King).fen_char(), 'k');
    }

    #[test]
    fn test_square_algebraic() {
        let e2 = Square::from_algebraic("e2").unwrap();
        assert_eq!(e2, Square::new(6, 4));
        assert_eq!(e2.to_algebraic(), "e2");

        let a8 = Square::from_algebraic("a8").unwrap();
        assert_eq!(a8, Square::new(0, 0));

        let h1 = Square::from_algebraic("h1").unwrap();
        assert_eq!(h1, Square::new(7, 7));

        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
    }

    #[test]
    #[should_panic(expected = "Row must be in range 0-7")]
    fn test_square_out_of_range_panics() {
        let _ = Square::new(8, 0);
    }

    #[test]
    fn test_square_distances() {
        let a = Square::new(4, 4);
        let b = Square::new(6, 5);
        assert_eq!(a.chebyshev_distance(b), 2);
        assert!((a.euclidean_distance(b) - 5f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_square_all_covers_board() {
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::all().next(), Some(Square::new(0, 0)));
    }

    #[test]
    fn test_double_pawn_push_detection() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let push = ChessMove::new(Square::new(6, 4), Square::new(4, 4), pawn, None);
        assert!(push.is_double_pawn_push());

        let single = ChessMove::new(Square::new(6, 4), Square::new(5, 4), pawn, None);
        assert!(!single.is_double_pawn_push());

        let rook = Piece::new(Color::White, PieceKind::Rook);
        let slide = ChessMove::new(Square::new(7, 0), Square::new(5, 0), rook, None);
        assert!(!slide.is_double_pawn_push());
    }

    #[test]
    fn test_piece_serde_uses_code() {
        let piece = Piece::new(Color::Black, PieceKind::Pawn);
        let json = serde_json::to_string(&piece).unwrap();
        assert_eq!(json, "\"bp\"");
        let back: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(back, piece);
    }
}
