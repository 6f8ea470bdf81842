//! Move history
//!
//! Append-only record of every accepted half-move. The last entry doubles as
//! the `last_move` consulted for en passant.

use crate::game::rules::move_to_notation;
use crate::game::types::ChessMove;
use serde::{Deserialize, Serialize};

/// Ordered list of completed moves
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vec<ChessMove>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed move
    pub fn add_move(&mut self, record: ChessMove) {
        self.moves.push(record);
    }

    /// Get the last move made
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn get_move(&self, index: usize) -> Option<&ChessMove> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChessMove> {
        self.moves.iter()
    }

    /// Every move rendered as `e2-e4` strings, oldest first
    pub fn notation(&self) -> Vec<String> {
        self.moves.iter().map(move_to_notation).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Color, Piece, PieceKind, Square};

    fn pawn_push() -> ChessMove {
        ChessMove::new(
            Square::new(6, 4),
            Square::new(4, 4),
            Piece::new(Color::White, PieceKind::Pawn),
            None,
        )
    }

    #[test]
    fn test_history_starts_empty() {
        let history = MoveHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.last_move(), None);
    }

    #[test]
    fn test_add_move_and_last_move() {
        let mut history = MoveHistory::new();
        history.add_move(pawn_push());

        assert_eq!(history.len(), 1);
        assert_eq!(history.last_move().map(|m| m.to), Some(Square::new(4, 4)));
        assert_eq!(history.notation(), vec!["e2-e4".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut history = MoveHistory::new();
        history.add_move(pawn_push());
        history.clear();
        assert!(history.is_empty());
        assert!(history.get_move(0).is_none());
    }
}
