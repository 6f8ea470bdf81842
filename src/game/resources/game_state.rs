//! Game state and the move executor
//!
//! [`GameState`] is the single source of truth for one game: board, side to
//! move, status, history, clocks and the transient click selection. It is
//! created fresh for every new game and mutated only through
//! [`GameState::make_move`], [`GameState::tick`] and [`GameState::resign`].
//!
//! # Move execution
//!
//! ```text
//! make_move(from, to)
//!   ├─ reject: terminal status, empty source, wrong side, pseudo-illegal
//!   ├─ simulate on a copy, reject if the mover's king is attacked
//!   └─ commit: history, captures, clock increment, side flip,
//!              check / checkmate / stalemate, move count, clear selection
//! ```
//!
//! Rejections return `Err` and leave every field untouched, so the caller only
//! has to clear the selection.

use super::captured::CapturedPieces;
use super::game_over::GameStatus;
use super::history::MoveHistory;
use super::selection::{ClickResult, Selection};
use super::timer::GameClock;
use crate::game::ai::GameMode;
use crate::game::error::{GameError, GameResult};
use crate::game::rules::{
    board_to_fen, has_any_legal_move, is_king_in_check, is_valid_move, legal_destinations,
    legal_moves, move_to_notation, Board, LegalMove,
};
use crate::game::types::{ChessMove, Color, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Result of the last AI search, for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiStats {
    pub score: f64,
    pub thinking_time_ms: u64,
    pub depth: Option<u32>,
    /// Name of the engine that produced the move
    pub engine: String,
}

/// Complete state of one game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    pub current_player: Color,
    pub status: GameStatus,
    pub history: MoveHistory,
    pub selection: Selection,
    pub is_in_check: bool,
    /// Full-move number, starts at 1 and increments after Black moves
    pub move_count: u32,
    pub clock: GameClock,
    pub mode: GameMode,
    pub captured: CapturedPieces,
    pub ai_stats: Option<AiStats>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::Classic)
    }
}

impl GameState {
    /// Standard starting position, White to move, clocks set for `mode`
    pub fn new(mode: GameMode) -> Self {
        Self::from_position(Board::standard(), Color::White, mode)
    }

    /// Start from an arbitrary position
    ///
    /// Status and check flag are derived from the position, so a stalemate or
    /// checkmate fixture is terminal immediately.
    pub fn from_position(board: Board, to_move: Color, mode: GameMode) -> Self {
        let mut state = Self {
            board,
            current_player: to_move,
            status: GameStatus::Playing,
            history: MoveHistory::new(),
            selection: Selection::default(),
            is_in_check: false,
            move_count: 1,
            clock: GameClock::for_mode(mode),
            mode,
            captured: CapturedPieces::default(),
            ai_stats: None,
        };
        state.refresh_status();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Most recent move, consulted for en passant
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.history.last_move()
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Winner of a finished game
    ///
    /// The side to move lost for checkmate, timeout and resignation.
    pub fn winner(&self) -> Option<Color> {
        self.status.winner(self.current_player)
    }

    pub fn fen(&self) -> String {
        board_to_fen(&self.board, self.current_player)
    }

    /// Fully legal moves for the side to move
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        legal_moves(&self.board, self.current_player, self.last_move())
    }

    /// Execute a move for the side to move
    ///
    /// On success returns the recorded move; on failure the state is
    /// unchanged.
    pub fn make_move(&mut self, from: Square, to: Square) -> GameResult<ChessMove> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver {
                status: self.status,
            });
        }

        let piece = self
            .board
            .get(from)
            .ok_or(GameError::PieceNotFound { square: from })?;

        if piece.color != self.current_player {
            return Err(GameError::NotYourTurn { color: piece.color });
        }

        if !is_valid_move(&self.board, from, to, self.last_move()) {
            debug!("[GAME] Rejected {}-{}: invalid for {}", from, to, piece);
            return Err(GameError::InvalidMove { from, to });
        }

        let mut next = self.board;
        let undo = next.apply(from, to);
        if is_king_in_check(&next, piece.color) {
            debug!("[GAME] Rejected {}-{}: king would be in check", from, to);
            return Err(GameError::LeavesKingInCheck { from, to });
        }

        let record = ChessMove::new(from, to, piece, undo.captured());
        let mover = self.current_player;

        self.board = next;
        if let Some(captured) = record.captured {
            self.captured.add_capture(captured);
        }
        self.history.add_move(record.clone());
        self.clock.apply_increment(mover);
        self.current_player = mover.opponent();
        if mover == Color::Black {
            self.move_count += 1;
        }
        self.selection.clear();
        self.ai_stats = None;
        self.refresh_status();

        debug!(
            "[GAME] {} played {} (status: {})",
            mover,
            move_to_notation(&record),
            self.status
        );
        if self.status.is_terminal() {
            info!("[GAME] {}", self.status.message(self.current_player));
        }

        Ok(record)
    }

    /// Recompute check flag and status for the side to move
    fn refresh_status(&mut self) {
        let player = self.current_player;
        self.is_in_check = is_king_in_check(&self.board, player);
        let has_moves = has_any_legal_move(&self.board, player, self.history.last_move());

        self.status = match (has_moves, self.is_in_check) {
            (false, true) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Playing,
        };
    }

    /// Run the side-to-move's clock down by `elapsed_secs`
    ///
    /// Returns true if this tick ended the game on time. Ignored once the game
    /// is over.
    pub fn tick(&mut self, elapsed_secs: f32) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        if self.clock.consume(self.current_player, elapsed_secs) {
            self.status = GameStatus::Timeout;
            self.selection.clear();
            info!("[GAME] {}", self.status.message(self.current_player));
            return true;
        }
        false
    }

    /// The side to move resigns
    ///
    /// Returns false if the game was already over.
    pub fn resign(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = GameStatus::Resigned;
        self.selection.clear();
        info!("[GAME] {}", self.status.message(self.current_player));
        true
    }

    /// Interpret a click on `square`
    ///
    /// Selecting and deselecting update [`Self::selection`]; a move attempt is
    /// only reported, the caller decides whether to execute it.
    pub fn handle_square_click(&mut self, square: Square) -> Option<ClickResult> {
        if self.status.is_terminal() {
            return None;
        }

        if let Some(selected) = self.selection.selected_square {
            if selected == square {
                self.selection.clear();
                return Some(ClickResult::Deselected);
            }
            return Some(ClickResult::MoveAttempt {
                from: selected,
                to: square,
            });
        }

        match self.board.get(square) {
            Some(piece) if piece.color == self.current_player => {
                let hints = legal_destinations(&self.board, square, self.last_move());
                self.selection.select(square, hints);
                Some(ClickResult::Selected { square })
            }
            _ => None,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn set_ai_stats(&mut self, stats: AiStats) {
        self.ai_stats = Some(stats);
    }
}
