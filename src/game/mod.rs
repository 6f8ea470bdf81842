//! Chess game logic module - Mathematical Chess rules, AI and game flow
//!
//! Everything in here is plain data plus pure functions, except for the
//! controller which sequences human input, AI turns and math challenges.
//!
//! # Module Organization
//!
//! - `types` - Colors, pieces, squares and completed moves
//! - `rules` - Pure chess logic (move validation, check, legality, FEN)
//! - `resources` - Game state (turn, status, history, clock, selection)
//! - `ai` - Heuristic move generator and the engine abstraction
//! - `math` - Math challenges gating moves in `math-master` games
//! - `controller` - One game at a time: turn ownership, AI turns, challenges
//! - `hint` - Move suggestions with advice
//! - `telemetry` - Move and game-end records
//! - `error` - Errors returned when an operation is refused
//!
//! # Flow
//!
//! 1. A click selects a piece (`resources::GameState::handle_square_click`)
//! 2. A second click on a destination submits the move to the controller
//! 3. In `math-master` games the move waits on a correct answer
//! 4. `resources::GameState::make_move` validates, commits and refreshes status
//! 5. On the AI's turn the controller asks a `MoveEngine` for a move

pub mod ai;
pub mod controller;
pub mod error;
pub mod hint;
pub mod math;
pub mod resources;
pub mod rules;
pub mod telemetry;
pub mod types;

pub use controller::{AiTurnRequest, AiTurnToken, ClickOutcome, GameController, MoveOutcome};
pub use error::{GameError, GameResult};
pub use resources::{GameState, GameStatus};
pub use types::{ChessMove, Color, Piece, PieceKind, Square};
