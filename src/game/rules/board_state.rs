//! Board state representation for move validation
//!
//! `Board` is a plain `Copy` value (an 8x8 array of optional pieces) so it can
//! live on the stack and be snapshotted for free. Hot paths don't copy it
//! though: [`Board::apply`] returns an [`Undo`] that [`Board::revert`] uses to
//! restore the exact previous position.

use crate::game::types::{Color, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// 8x8 board indexed `[row][col]`, row 0 = rank 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

/// Everything needed to take back a move applied with [`Board::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    /// Whatever stood on the destination square
    pub replaced: Option<Piece>,
    /// Pawn removed by an en passant capture, with the square it stood on
    pub en_passant: Option<(Square, Piece)>,
}

impl Undo {
    /// The piece actually captured by the move, en passant included
    pub fn captured(&self) -> Option<Piece> {
        self.replaced
            .or_else(|| self.en_passant.map(|(_, piece)| piece))
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.set(Square::new(0, col), Some(Piece::new(Color::Black, *kind)));
            board.set(
                Square::new(1, col),
                Some(Piece::new(Color::Black, PieceKind::Pawn)),
            );
            board.set(
                Square::new(6, col),
                Some(Piece::new(Color::White, PieceKind::Pawn)),
            );
            board.set(Square::new(7, col), Some(Piece::new(Color::White, *kind)));
        }
        board
    }

    /// Build a board from `(code, algebraic square)` pairs
    ///
    /// Panics on malformed codes or squares; intended for fixtures.
    ///
    /// # Example
    /// ```rust,ignore
    /// let board = Board::from_pieces(&[("wk", "h1"), ("bk", "f2"), ("bq", "g3")]);
    /// ```
    pub fn from_pieces(pieces: &[(&str, &str)]) -> Self {
        let mut board = Self::empty();
        for (code, square) in pieces {
            let piece = Piece::from_code(code)
                .unwrap_or_else(|| panic!("malformed piece code '{}'", code));
            let square = Square::from_algebraic(square)
                .unwrap_or_else(|| panic!("malformed square '{}'", square));
            board.set(square, Some(piece));
        }
        board
    }

    /// Build a board from rows of piece codes (`None` = empty), row 0 first
    pub fn from_codes(rows: [[Option<&str>; 8]; 8]) -> Self {
        let mut board = Self::empty();
        for (row, codes) in rows.iter().enumerate() {
            for (col, code) in codes.iter().enumerate() {
                if let Some(code) = code {
                    let piece = Piece::from_code(code)
                        .unwrap_or_else(|| panic!("malformed piece code '{}'", code));
                    board.set(Square::new(row as u8, col as u8), Some(piece));
                }
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn get_piece_color(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Rows of the board, row 0 (rank 8) first
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// All occupied squares with their pieces, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    /// Occupied squares of one colour
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Locate `color`'s king by scanning for its piece code
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
    }

    /// Move a piece, removing an en-passant victim when the move is a pawn
    /// stepping diagonally onto an empty square
    ///
    /// Does not validate the move. Panics if `from` is empty.
    pub fn apply(&mut self, from: Square, to: Square) -> Undo {
        let moved = self
            .get(from)
            .unwrap_or_else(|| panic!("apply called with empty source square {}", from));
        let replaced = self.get(to);

        let mut en_passant = None;
        if moved.kind == PieceKind::Pawn && from.col != to.col && replaced.is_none() {
            let victim_square = Square::new(from.row, to.col);
            if let Some(victim) = self.get(victim_square) {
                self.set(victim_square, None);
                en_passant = Some((victim_square, victim));
            }
        }

        self.set(to, Some(moved));
        self.set(from, None);

        Undo {
            from,
            to,
            moved,
            replaced,
            en_passant,
        }
    }

    /// Take back a move applied with [`Board::apply`]
    pub fn revert(&mut self, undo: Undo) {
        self.set(undo.from, Some(undo.moved));
        self.set(undo.to, undo.replaced);
        if let Some((square, piece)) = undo.en_passant {
            self.set(square, Some(piece));
        }
    }

    /// Count pieces of a colour
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_position_layout() {
        let board = Board::standard();
        assert_eq!(board.count(Color::White), 16);
        assert_eq!(board.count(Color::Black), 16);
        assert_eq!(
            board.get(Square::new(0, 4)),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(
            board.get(Square::new(7, 3)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert!(board.is_empty(Square::new(4, 4)));
    }

    #[test]
    fn test_find_king() {
        let board = Board::standard();
        assert_eq!(board.find_king(Color::White), Some(Square::new(7, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Square::new(0, 4)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn test_apply_and_revert_capture() {
        let mut board = Board::from_pieces(&[("wr", "a1"), ("bn", "a5")]);
        let before = board;
        let undo = board.apply(Square::new(7, 0), Square::new(3, 0));

        assert_eq!(undo.captured(), Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert!(board.is_empty(Square::new(7, 0)));
        assert_eq!(board.get_piece_color(Square::new(3, 0)), Some(Color::White));

        board.revert(undo);
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_en_passant_removes_passed_pawn() {
        let mut board = Board::from_pieces(&[("bp", "d4"), ("wp", "e4")]);
        let before = board;
        let undo = board.apply(
            Square::from_algebraic("d4").unwrap(),
            Square::from_algebraic("e3").unwrap(),
        );

        assert_eq!(undo.replaced, None);
        assert_eq!(undo.captured(), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(board.is_empty(Square::from_algebraic("e4").unwrap()));
        assert_eq!(
            board.get(Square::from_algebraic("e3").unwrap()),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );

        board.revert(undo);
        assert_eq!(board, before);
    }

    #[test]
    fn test_from_codes_matches_standard() {
        let board = Board::from_codes([
            [Some("br"), Some("bn"), Some("bb"), Some("bq"), Some("bk"), Some("bb"), Some("bn"), Some("br")],
            [Some("bp"); 8],
            [None; 8],
            [None; 8],
            [None; 8],
            [None; 8],
            [Some("wp"); 8],
            [Some("wr"), Some("wn"), Some("wb"), Some("wq"), Some("wk"), Some("wb"), Some("wn"), Some("wr")],
        ]);
        assert_eq!(board, Board::standard());
    }
}
