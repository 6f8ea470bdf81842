//! Chess game resources - per-game state
//!
//! Everything that changes while a game is played lives here, owned by a
//! single [`GameState`].
//!
//! # Resource Categories
//!
//! ## Game Status
//! - [`GameStatus`] - Playing / check / terminal outcomes
//!
//! ## Player Interaction
//! - [`Selection`] - Currently selected square and its legal destinations
//! - [`ClickResult`] - Outcome of a board click
//!
//! ## Game History
//! - [`MoveHistory`] - Append-only move record
//! - [`CapturedPieces`] - Material tracking and advantage calculation
//!
//! ## Game Timing
//! - [`GameClock`] - Per-side countdown with Fischer increment
//!
//! ## Game State
//! - [`GameState`] - Owns all of the above and executes moves

pub mod captured;
pub mod game_over;
pub mod game_state;
pub mod history;
pub mod selection;
pub mod timer;


// Re-export all resources for convenience
pub use captured::CapturedPieces;
pub use game_over::GameStatus;
pub use game_state::{AiStats, GameState};
pub use history::MoveHistory;
pub use selection::{ClickResult, Selection};
pub use timer::GameClock;
