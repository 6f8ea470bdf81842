//! Game telemetry boundary
//!
//! The game hands plain records to a [`GameTracker`] and knows nothing about
//! where they end up. [`LogTracker`] writes them to the log, [`MemoryTracker`]
//! keeps them for inspection in tests.

use crate::game::ai::GameMode;
use crate::game::resources::GameStatus;
use crate::game::types::{Color, Piece};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// One accepted half-move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveStatRecord {
    pub game_id: Uuid,
    /// Full-move number the half-move belongs to
    pub move_number: u32,
    pub player: Color,
    /// `e2-e4` style notation
    pub notation: String,
    pub captured: Option<Piece>,
    /// AI thinking time; `None` for human moves
    pub thinking_ms: Option<u64>,
}

/// Summary emitted once when a game reaches a terminal status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEndRecord {
    pub game_id: Uuid,
    pub status: GameStatus,
    pub winner: Option<Color>,
    /// Number of half-moves played
    pub total_moves: usize,
    pub duration_secs: f64,
    pub mode: GameMode,
    /// Math accuracy percentage, for math-master games
    pub math_accuracy: Option<u32>,
}

/// Receiver of game statistics
pub trait GameTracker: Send + Sync {
    fn record_move(&self, record: &MoveStatRecord);
    fn record_game_end(&self, record: &GameEndRecord);
}

/// Tracker that logs every record
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracker;

impl GameTracker for LogTracker {
    fn record_move(&self, record: &MoveStatRecord) {
        info!(
            "[TELEMETRY] game={} move={} {} {}{}",
            record.game_id,
            record.move_number,
            record.player,
            record.notation,
            record
                .captured
                .map(|p| format!(" captures {}", p))
                .unwrap_or_default()
        );
    }

    fn record_game_end(&self, record: &GameEndRecord) {
        match serde_json::to_string(record) {
            Ok(json) => info!("[TELEMETRY] game end {}", json),
            Err(e) => info!("[TELEMETRY] game end {} ({})", record.game_id, e),
        }
    }
}

/// Tracker that keeps every record in memory
#[derive(Debug, Default)]
pub struct MemoryTracker {
    moves: Mutex<Vec<MoveStatRecord>>,
    game_ends: Mutex<Vec<GameEndRecord>>,
}

impl MemoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves(&self) -> Vec<MoveStatRecord> {
        self.moves.lock().clone()
    }

    pub fn game_ends(&self) -> Vec<GameEndRecord> {
        self.game_ends.lock().clone()
    }
}

impl GameTracker for MemoryTracker {
    fn record_move(&self, record: &MoveStatRecord) {
        self.moves.lock().push(record.clone());
    }

    fn record_game_end(&self, record: &GameEndRecord) {
        self.game_ends.lock().push(record.clone());
    }
}
