//! Chess AI opponent
//!
//! # Architecture
//!
//! - `resource`: game mode, difficulty and who-plays-what configuration
//! - `evaluation`: static scoring terms for a single move
//! - `generator`: picks a move from the legal move list
//! - `engine`: async [`MoveEngine`] trait with local and fallback engines
//!
//! The generator works on a snapshot of the board. The controller checks the
//! snapshot still matches the live game before executing the chosen move
//! through the normal move executor, so AI moves follow the same validation
//! rules as human moves.

pub mod engine;
pub mod evaluation;
pub mod generator;
pub mod resource;

// Re-export for convenience
pub use engine::{
    EngineError, EngineRequest, FallbackEngine, LocalEngine, MoveEngine, PositionAnalysis,
    ScoredMove,
};
pub use generator::{generate_ai_move, AiMove};
pub use resource::{AIDifficulty, GameConfig, GameMode, Opponent};
