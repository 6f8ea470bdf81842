//! Move engine abstraction
//!
//! Every source of AI moves implements [`MoveEngine`]:
//!
//! - [`LocalEngine`] - the in-process heuristic generator, always available
//! - [`crate::networking::RemoteEngine`] - optional JSON-over-HTTP engine
//! - [`FallbackEngine`] - tries a primary engine and answers from a fallback
//!   on any error, disabling the primary for the rest of the session
//!
//! Engines are async so a remote call never blocks the caller; the local
//! engine simply completes immediately.

use super::generator::{generate_ai_move, AiMove};
use super::AIDifficulty;
use crate::game::resources::GameState;
use crate::game::rules::{board_to_fen, Board};
use crate::game::types::{ChessMove, Color, Square};
use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{info, warn};

/// Errors from a move engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Engine unavailable: {0}")]
    Unavailable(String),

    #[error("Engine timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid engine response: {0}")]
    InvalidResponse(String),

    /// Engine proposed a move that is not fully legal in the position
    #[error("Engine proposed illegal move {from}-{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("No legal moves for {0}")]
    NoLegalMoves(Color),
}

/// Position snapshot handed to an engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineRequest {
    pub board: Board,
    pub player: Color,
    pub difficulty: AIDifficulty,
    pub last_move: Option<ChessMove>,
}

impl EngineRequest {
    pub fn from_state(state: &GameState, difficulty: AIDifficulty) -> Self {
        Self {
            board: *state.board(),
            player: state.current_player,
            difficulty,
            last_move: state.last_move().cloned(),
        }
    }

    pub fn fen(&self) -> String {
        board_to_fen(&self.board, self.player)
    }
}

/// Candidate line from a position analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMove {
    #[serde(rename = "move")]
    pub uci: String,
    pub score: f64,
}

/// Position evaluation from a searching engine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionAnalysis {
    pub evaluation: f64,
    #[serde(default)]
    pub best_moves: Vec<ScoredMove>,
    #[serde(default)]
    pub threats: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

/// Source of AI moves
#[async_trait]
pub trait MoveEngine: Send + Sync {
    /// Short name recorded with every move the engine produces
    fn name(&self) -> &str;

    /// Cheap availability check
    async fn is_available(&self) -> bool {
        true
    }

    /// Choose a move for `request.player`
    async fn choose_move(&self, request: &EngineRequest) -> Result<AiMove, EngineError>;

    /// Evaluate the position to `depth`, if the engine can
    ///
    /// `None` means no analysis is available; the heuristic engine never has one.
    async fn analyze(&self, _request: &EngineRequest, _depth: u32) -> Option<PositionAnalysis> {
        None
    }
}

/// In-process heuristic engine
///
/// Holds its own seeded RNG so a game can be replayed from a seed.
pub struct LocalEngine {
    rng: Mutex<StdRng>,
}

impl LocalEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Engine seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

impl Default for LocalEngine {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[async_trait]
impl MoveEngine for LocalEngine {
    fn name(&self) -> &str {
        super::generator::LOCAL_ENGINE_NAME
    }

    async fn choose_move(&self, request: &EngineRequest) -> Result<AiMove, EngineError> {
        let mut rng = self.rng.lock();
        generate_ai_move(
            &request.board,
            request.player,
            request.difficulty,
            request.last_move.as_ref(),
            &mut *rng,
        )
        .ok_or(EngineError::NoLegalMoves(request.player))
    }
}

/// Primary engine with a fallback
///
/// A single failure of the primary disables it until [`Self::retry_primary`]
/// is called; there are no automatic retries.
pub struct FallbackEngine<P, F> {
    primary: P,
    fallback: F,
    primary_enabled: AtomicBool,
}

impl<P: MoveEngine, F: MoveEngine> FallbackEngine<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self {
            primary,
            fallback,
            primary_enabled: AtomicBool::new(true),
        }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn is_primary_enabled(&self) -> bool {
        self.primary_enabled.load(Ordering::Acquire)
    }

    pub fn disable_primary(&self) {
        self.primary_enabled.store(false, Ordering::Release);
    }

    /// Re-enable the primary after it was disabled by a failure
    pub fn retry_primary(&self) {
        info!("[ENGINE] Re-enabling {}", self.primary.name());
        self.primary_enabled.store(true, Ordering::Release);
    }

    /// Check the primary once and enable it only if it answers
    pub async fn check_primary(&self) -> bool {
        let available = self.primary.is_available().await;
        self.primary_enabled.store(available, Ordering::Release);
        if available {
            info!("[ENGINE] {} is available", self.primary.name());
        } else {
            info!(
                "[ENGINE] {} not available, using {}",
                self.primary.name(),
                self.fallback.name()
            );
        }
        available
    }
}

#[async_trait]
impl<P: MoveEngine, F: MoveEngine> MoveEngine for FallbackEngine<P, F> {
    fn name(&self) -> &str {
        if self.is_primary_enabled() {
            self.primary.name()
        } else {
            self.fallback.name()
        }
    }

    async fn is_available(&self) -> bool {
        self.fallback.is_available().await
    }

    async fn choose_move(&self, request: &EngineRequest) -> Result<AiMove, EngineError> {
        if self.is_primary_enabled() {
            match self.primary.choose_move(request).await {
                Ok(mv) => return Ok(mv),
                Err(e) => {
                    warn!(
                        "[ENGINE] {} failed ({}), falling back to {}",
                        self.primary.name(),
                        e,
                        self.fallback.name()
                    );
                    self.disable_primary();
                }
            }
        }
        self.fallback.choose_move(request).await
    }

    async fn analyze(&self, request: &EngineRequest, depth: u32) -> Option<PositionAnalysis> {
        if self.is_primary_enabled() {
            if let Some(analysis) = self.primary.analyze(request, depth).await {
                return Some(analysis);
            }
        }
        self.fallback.analyze(request, depth).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::GameMode;
    use crate::game::rules::is_legal_move;
    use std::sync::atomic::AtomicUsize;

    struct BrokenEngine {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MoveEngine for BrokenEngine {
        fn name(&self) -> &str {
            "broken"
        }

        async fn is_available(&self) -> bool {
            false
        }

        async fn choose_move(&self, _request: &EngineRequest) -> Result<AiMove, EngineError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(EngineError::Unavailable("connection refused".to_string()))
        }
    }

    fn request() -> EngineRequest {
        EngineRequest::from_state(&GameState::new(GameMode::Classic), AIDifficulty::Medium)
    }

    #[tokio::test]
    async fn test_local_engine_returns_legal_move() {
        let engine = LocalEngine::new(3);
        let req = request();
        let mv = engine.choose_move(&req).await.unwrap();

        assert!(is_legal_move(&req.board, mv.from, mv.to, None));
        assert_eq!(mv.engine, "local");
    }

    #[tokio::test]
    async fn test_local_engine_reports_no_moves() {
        let board = Board::from_pieces(&[("wk", "h1"), ("bk", "f2"), ("bq", "g3")]);
        let req = EngineRequest {
            board,
            player: Color::White,
            difficulty: AIDifficulty::Hard,
            last_move: None,
        };
        let err = LocalEngine::new(0).choose_move(&req).await.unwrap_err();
        assert!(matches!(err, EngineError::NoLegalMoves(Color::White)));
    }

    #[tokio::test]
    async fn test_fallback_disables_primary_after_one_failure() {
        let engine = FallbackEngine::new(
            BrokenEngine {
                calls: AtomicUsize::new(0),
            },
            LocalEngine::new(9),
        );

        let first = engine.choose_move(&request()).await.unwrap();
        assert_eq!(first.engine, "local");
        assert!(!engine.is_primary_enabled());

        engine.choose_move(&request()).await.unwrap();
        assert_eq!(
            engine.primary().calls.load(Ordering::SeqCst),
            1,
            "Disabled primary is not retried automatically"
        );

        engine.retry_primary();
        assert!(engine.is_primary_enabled());
        engine.choose_move(&request()).await.unwrap();
        assert_eq!(engine.primary().calls.load(Ordering::SeqCst), 2);
    }

    struct AnalysingEngine;

    #[async_trait]
    impl MoveEngine for AnalysingEngine {
        fn name(&self) -> &str {
            "analysing"
        }

        async fn choose_move(&self, _request: &EngineRequest) -> Result<AiMove, EngineError> {
            Err(EngineError::Unavailable("moves not supported".to_string()))
        }

        async fn analyze(&self, _request: &EngineRequest, depth: u32) -> Option<PositionAnalysis> {
            Some(PositionAnalysis {
                evaluation: f64::from(depth),
                threats: vec!["Qxf7".to_string()],
                ..PositionAnalysis::default()
            })
        }
    }

    #[tokio::test]
    async fn test_fallback_forwards_analysis() {
        assert_eq!(LocalEngine::new(0).analyze(&request(), 3).await, None);

        let engine = FallbackEngine::new(AnalysingEngine, LocalEngine::new(0));
        let analysis = engine.analyze(&request(), 3).await.expect("primary analyses");
        assert_eq!(analysis.evaluation, 3.0);
        assert_eq!(analysis.threats, vec!["Qxf7".to_string()]);

        engine.disable_primary();
        assert_eq!(engine.analyze(&request(), 3).await, None);
    }

    #[tokio::test]
    async fn test_check_primary() {
        let engine = FallbackEngine::new(
            BrokenEngine {
                calls: AtomicUsize::new(0),
            },
            LocalEngine::new(1),
        );
        assert!(!engine.check_primary().await);
        assert_eq!(engine.name(), "local");
    }

    #[test]
    fn test_request_fen() {
        assert_eq!(
            request().fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }
}
