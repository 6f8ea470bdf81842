//! Game status tracking and result reporting
//!
//! Tracks whether the game is running, whose king is attacked, and how it
//! ended.
//!
//! # State Transitions
//!
//! ```text
//! Playing <-> Check
//! Playing / Check -> Checkmate | Stalemate | Timeout | Resigned
//! ```
//!
//! The four right-hand states are terminal: no further moves, ticks or
//! resignations are accepted once one of them is reached.
//!
//! # Winner
//!
//! The side to move is the side that lost for checkmate, timeout and
//! resignation, so the winner is always the *other* colour. Stalemate has no
//! winner.

use crate::game::types::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Game in progress, side to move is not in check
    #[default]
    Playing,
    /// Game in progress, side to move is in check
    Check,
    /// Side to move is in check with no legal replies
    Checkmate,
    /// Side to move is not in check and has no legal replies (draw)
    Stalemate,
    /// Side to move ran out of time
    Timeout,
    /// Side to move resigned
    Resigned,
}

impl GameStatus {
    /// Check if the game has ended
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// if state.status.is_terminal() {
    ///     return; // Don't process input when game is over
    /// }
    /// ```
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Timeout | GameStatus::Resigned
        )
    }

    /// Winner for a status reached with `to_move` as the side to move
    pub fn winner(self, to_move: Color) -> Option<Color> {
        match self {
            GameStatus::Checkmate | GameStatus::Timeout | GameStatus::Resigned => {
                Some(to_move.opponent())
            }
            _ => None,
        }
    }

    pub fn is_draw(self) -> bool {
        self == GameStatus::Stalemate
    }

    /// Human-readable result message
    ///
    /// `to_move` is the side to move when the status was reached.
    pub fn message(self, to_move: Color) -> String {
        let winner = to_move.opponent();
        match self {
            GameStatus::Playing => "Game in progress".to_string(),
            GameStatus::Check => format!("{} is in check", to_move),
            GameStatus::Checkmate => format!("{} wins by checkmate!", winner),
            GameStatus::Stalemate => "Draw by stalemate".to_string(),
            GameStatus::Timeout => format!("{} wins on time!", winner),
            GameStatus::Resigned => format!("{} resigned, {} wins", to_move, winner),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Timeout => "timeout",
            GameStatus::Resigned => "resigned",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_status_default() {
        //! Verifies GameStatus defaults to Playing
        let status = GameStatus::default();
        assert_eq!(status, GameStatus::Playing);
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_check_is_not_terminal() {
        assert!(!GameStatus::Check.is_terminal());
        assert_eq!(GameStatus::Check.winner(Color::White), None);
    }

    #[test]
    fn test_terminal_statuses() {
        for status in [
            GameStatus::Checkmate,
            GameStatus::Stalemate,
            GameStatus::Timeout,
            GameStatus::Resigned,
        ] {
            assert!(status.is_terminal(), "{} should be terminal", status);
        }
    }

    #[test]
    fn test_winner_is_side_not_to_move() {
        //! Checkmate, timeout and resignation are lost by the side to move
        assert_eq!(GameStatus::Checkmate.winner(Color::White), Some(Color::Black));
        assert_eq!(GameStatus::Timeout.winner(Color::Black), Some(Color::White));
        assert_eq!(GameStatus::Resigned.winner(Color::White), Some(Color::Black));
        assert_eq!(GameStatus::Stalemate.winner(Color::White), None);
        assert!(GameStatus::Stalemate.is_draw());
    }

    #[test]
    fn test_message() {
        assert_eq!(
            GameStatus::Checkmate.message(Color::White),
            "black wins by checkmate!"
        );
        assert_eq!(GameStatus::Stalemate.message(Color::Black), "Draw by stalemate");
    }
}
