//! HTTP client for an external chess engine
//!
//! The engine service speaks JSON:
//!
//! - `GET /health` - any success status means available
//! - `POST /move` `{fen, difficulty, time_limit}` →
//!   `{move: {from: {row, col}, to: {row, col}, uci}, score, depth, thinking_time}`
//! - `POST /analyze` `{fen, depth}` →
//!   `{evaluation, best_moves: [{move, score}], threats, weaknesses}`
//!
//! Every move the service proposes is checked against the local rules before
//! it is handed to the game.

use crate::game::ai::{AiMove, EngineError, EngineRequest, MoveEngine, PositionAnalysis};
use crate::game::rules::is_legal_move;
use crate::game::types::Square;
use async_trait::async_trait;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};
use web_time::Instant;

/// Name recorded with moves produced by the remote engine
pub const REMOTE_ENGINE_NAME: &str = "remote";

/// Default engine address
pub const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Copy, Deserialize)]
struct WireSquare {
    row: i64,
    col: i64,
}

impl WireSquare {
    fn to_square(self) -> Option<Square> {
        let row = i8::try_from(self.row).ok()?;
        let col = i8::try_from(self.col).ok()?;
        Square::try_new(row, col)
    }
}

#[derive(Debug, Deserialize)]
struct WireMove {
    from: WireSquare,
    to: WireSquare,
    #[serde(default)]
    uci: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MoveResponse {
    #[serde(rename = "move")]
    chosen: WireMove,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    depth: Option<u32>,
    /// Seconds
    #[serde(default)]
    thinking_time: Option<f64>,
}

/// Engine reached over HTTP
#[derive(Debug, Clone)]
pub struct RemoteEngine {
    client: reqwest::Client,
    base_url: String,
    health_timeout: Duration,
    analysis_timeout: Duration,
}

impl RemoteEngine {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            health_timeout: Duration::from_secs(2),
            analysis_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_timeouts(mut self, health: Duration, analysis: Duration) -> Self {
        self.health_timeout = health;
        self.analysis_timeout = analysis;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /health` within the health timeout
    pub async fn health_check(&self) -> Result<(), EngineError> {
        let response = with_timeout(self.health_timeout, self.client.get(self.url("/health")).send())
            .await?
            .map_err(|e| EngineError::Unavailable(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(EngineError::Unavailable(format!(
                "health check returned {}",
                response.status()
            )))
        }
    }

    /// Ask the engine for an evaluation of `fen`
    pub async fn analyze_position(
        &self,
        fen: &str,
        depth: u32,
    ) -> Result<PositionAnalysis, EngineError> {
        let body = serde_json::json!({
            "fen": fen,
            "depth": depth,
        });

        with_timeout(self.analysis_timeout, async {
            let response = self
                .client
                .post(self.url("/analyze"))
                .json(&body)
                .send()
                .await?;
            if !response.status().is_success() {
                return Err(EngineError::InvalidResponse(format!(
                    "analyze returned {}",
                    response.status()
                )));
            }
            Ok(response.json::<PositionAnalysis>().await?)
        })
        .await?
    }

    async fn request_move(&self, request: &EngineRequest) -> Result<MoveResponse, EngineError> {
        let body = serde_json::json!({
            "fen": request.fen(),
            "difficulty": request.difficulty.as_str(),
            "time_limit": request.difficulty.time_limit_secs(),
        });

        let response = self.client.post(self.url("/move")).json(&body).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(EngineError::InvalidResponse(format!(
                "move request failed ({}): {}",
                status, text
            )));
        }
        Ok(response.json::<MoveResponse>().await?)
    }
}

async fn with_timeout<T>(limit: Duration, fut: impl Future<Output = T>) -> Result<T, EngineError> {
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| EngineError::Timeout(limit))
}

#[async_trait]
impl MoveEngine for RemoteEngine {
    fn name(&self) -> &str {
        REMOTE_ENGINE_NAME
    }

    async fn is_available(&self) -> bool {
        match self.health_check().await {
            Ok(()) => true,
            Err(e) => {
                debug!("[ENGINE] Health check of {} failed: {}", self.base_url, e);
                false
            }
        }
    }

    async fn choose_move(&self, request: &EngineRequest) -> Result<AiMove, EngineError> {
        let start = Instant::now();
        let limit = Duration::from_secs(request.difficulty.time_limit_secs() + 1);
        let response = with_timeout(limit, self.request_move(request)).await??;

        let (Some(from), Some(to)) = (
            response.chosen.from.to_square(),
            response.chosen.to.to_square(),
        ) else {
            return Err(EngineError::InvalidResponse(format!(
                "square out of range in {:?}",
                response.chosen
            )));
        };

        if !is_legal_move(&request.board, from, to, request.last_move.as_ref()) {
            warn!(
                "[ENGINE] Remote engine proposed illegal move {}-{} ({:?})",
                from, to, response.chosen.uci
            );
            return Err(EngineError::IllegalMove { from, to });
        }

        let mut scratch = request.board;
        let captured = scratch.apply(from, to).captured();

        let thinking_time_ms = response
            .thinking_time
            .map(|secs| (secs * 1000.0).max(0.0) as u64)
            .unwrap_or_else(|| start.elapsed().as_millis() as u64);

        Ok(AiMove {
            from,
            to,
            captured,
            score: response.score,
            thinking_time_ms,
            depth: response.depth,
            engine: REMOTE_ENGINE_NAME.to_string(),
        })
    }

    async fn analyze(&self, request: &EngineRequest, depth: u32) -> Option<PositionAnalysis> {
        match self.analyze_position(&request.fen(), depth).await {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                warn!("[ENGINE] Analysis from {} failed: {}", self.base_url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_response() {
        let json = r#"{
            "move": {"from": {"row": 6, "col": 4}, "to": {"row": 4, "col": 4}, "uci": "e2e4"},
            "score": 0.3,
            "depth": 12,
            "thinking_time": 1.25
        }"#;
        let response: MoveResponse = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(response.chosen.from.to_square(), Some(Square::new(6, 4)));
        assert_eq!(response.chosen.uci.as_deref(), Some("e2e4"));
        assert_eq!(response.depth, Some(12));
    }

    #[test]
    fn test_out_of_range_square_rejected() {
        let square = WireSquare { row: 8, col: 0 };
        assert_eq!(square.to_square(), None);
        let square = WireSquare { row: -1, col: 3 };
        assert_eq!(square.to_square(), None);
    }

    #[test]
    fn test_parse_analysis_defaults() {
        let analysis: PositionAnalysis =
            serde_json::from_str(r#"{"evaluation": -1.5}"#).expect("Should deserialize");
        assert_eq!(analysis.evaluation, -1.5);
        assert!(analysis.best_moves.is_empty());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let engine = RemoteEngine::new("http://localhost:8000/");
        assert_eq!(engine.url("/move"), "http://localhost:8000/move");
    }

    #[tokio::test]
    async fn test_unreachable_engine_is_unavailable() {
        let engine = RemoteEngine::new("http://127.0.0.1:1")
            .with_timeouts(Duration::from_millis(500), Duration::from_millis(500));
        assert!(!engine.is_available().await);
    }
}
