//! Captured pieces tracking
//!
//! Tracks pieces captured by each player and calculates material advantage
//! for display.
//!
//! # Material Values
//!
//! Standard values in pawns: pawn 1, knight/bishop 3, rook 5, queen 9, king 0.
//!
//! Positive advantage means White is ahead, negative means Black is ahead.

use crate::game::types::{Color, Piece, PieceKind};
use serde::{Deserialize, Serialize};

/// Pieces captured by each side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    /// Black pieces that White has captured
    pub white_captured: Vec<PieceKind>,
    /// White pieces that Black has captured
    pub black_captured: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Record a captured piece, crediting the opposite colour
    pub fn add_capture(&mut self, captured: Piece) {
        match captured.color {
            Color::White => self.black_captured.push(captured.kind),
            Color::Black => self.white_captured.push(captured.kind),
        }
    }

    /// Material difference in pawns, White minus Black
    pub fn material_advantage(&self) -> i32 {
        let white_score: i32 = self.white_captured.iter().map(|k| pawn_units(*k)).sum();
        let black_score: i32 = self.black_captured.iter().map(|k| pawn_units(*k)).sum();
        white_score - black_score
    }

    pub fn clear(&mut self) {
        self.white_captured.clear();
        self.black_captured.clear();
    }
}

fn pawn_units(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_advantage() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(Piece::new(Color::Black, PieceKind::Rook));
        captured.add_capture(Piece::new(Color::Black, PieceKind::Pawn));
        captured.add_capture(Piece::new(Color::White, PieceKind::Knight));

        assert_eq!(captured.white_captured.len(), 2);
        assert_eq!(captured.material_advantage(), 3);
    }
}
