//! Selection state for click-driven input

use crate::game::types::Square;
use serde::{Deserialize, Serialize};

/// Currently selected square and the legal destinations of its piece
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub selected_square: Option<Square>,
    /// Fully legal destinations, used for move hints
    pub possible_moves: Vec<Square>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.selected_square = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected_square.is_some()
    }

    pub fn select(&mut self, square: Square, possible_moves: Vec<Square>) {
        self.selected_square = Some(square);
        self.possible_moves = possible_moves;
    }

    pub fn is_possible_move(&self, square: Square) -> bool {
        self.possible_moves.contains(&square)
    }
}

/// Outcome of a board click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClickResult {
    Selected { square: Square },
    Deselected,
    /// The caller decides whether to execute the move
    MoveAttempt { from: Square, to: Square },
}
