//! Chess rules module - Pure game logic
//!
//! Implements chess move validation and board state reasoning using pure
//! functions over a stack-allocated [`Board`].
//!
//! # Architecture
//!
//! The rules are layered, each layer only calling the ones below it:
//! - **Pseudo-legality** (`piece_moves`) - movement patterns and path blocking
//! - **Check detection** (`check`) - is a square / king attacked
//! - **Legality** (`legal`) - pseudo-legal moves that keep the own king safe
//!
//! # Module Structure
//!
//! - `board_state` - Board representation plus apply/revert for simulation
//! - `piece_moves` - Movement rules for each piece type
//! - `check` - Attack and check queries
//! - `legal` - Legal move enumeration and terminal-position detection
//! - `fen` - FEN encoding for external engines
//! - `notation` - `e2-e4` style move strings
//!
//! Castling and promotion are not part of these rules.

pub mod board_state;
pub mod check;
pub mod fen;
pub mod legal;
pub mod notation;
pub mod piece_moves;


// Re-export commonly used items
pub use board_state::{Board, Undo};
pub use check::{is_king_in_check, is_square_attacked};
pub use fen::board_to_fen;
pub use legal::{has_any_legal_move, is_legal_move, legal_destinations, legal_moves, LegalMove};
pub use notation::move_to_notation;
pub use piece_moves::{get_possible_moves, is_valid_move};
