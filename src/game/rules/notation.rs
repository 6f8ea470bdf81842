//! Move notation for display
//!
//! Coordinate style only (`e2-e4`): no piece letters, disambiguation, or
//! check/mate suffixes.

use crate::game::types::{ChessMove, Square};

/// Render a move as `from-to`
pub fn move_to_notation(chess_move: &ChessMove) -> String {
    squares_to_notation(chess_move.from, chess_move.to)
}

pub fn squares_to_notation(from: Square, to: Square) -> String {
    format!("{}-{}", from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Color, Piece, PieceKind};

    #[test]
    fn test_pawn_push_notation() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let mv = ChessMove::new(Square::new(6, 4), Square::new(4, 4), pawn, None);
        assert_eq!(move_to_notation(&mv), "e2-e4");
    }

    #[test]
    fn test_capture_has_no_suffix() {
        let queen = Piece::new(Color::Black, PieceKind::Queen);
        let captured = Some(Piece::new(Color::White, PieceKind::Pawn));
        let mv = ChessMove::new(Square::new(0, 3), Square::new(4, 7), queen, captured);
        assert_eq!(move_to_notation(&mv), "d8-h4");
    }
}
