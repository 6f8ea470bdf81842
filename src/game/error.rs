//! Error types for game module
//!
//! Provides the error type returned when the game refuses an operation. None
//! of these are fatal: the game state is left untouched and the caller is
//! expected to clear any transient selection.

use crate::game::resources::GameStatus;
use crate::game::types::{Color, Square};

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Move violates the piece's movement rules
    #[error("Invalid move: {from} to {to}")]
    InvalidMove { from: Square, to: Square },

    /// Move would leave the mover's own king in check
    #[error("Illegal move: {from} to {to} leaves the king in check")]
    LeavesKingInCheck { from: Square, to: Square },

    /// No piece at the source square
    #[error("No piece at {square}")]
    PieceNotFound { square: Square },

    /// Acting side does not own the turn
    #[error("Not {color}'s turn")]
    NotYourTurn { color: Color },

    /// Game already reached a terminal status
    #[error("Game is over: {status}")]
    GameOver { status: GameStatus },

    /// An AI turn is already being resolved
    #[error("AI is still thinking")]
    AiThinking,

    /// AI result was computed against a position that no longer exists
    #[error("Discarded stale AI result")]
    StaleAiResult,

    /// A move is waiting on a math challenge
    #[error("A math challenge is pending")]
    ChallengePending,

    /// Every engine failed to produce a move
    #[error("AI engine failed: {0}")]
    EngineFailed(String),

    #[error("No hints left for this game")]
    NoHintsLeft,
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
