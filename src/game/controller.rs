//! Game controller
//!
//! Owns one [`GameState`] plus everything around it that isn't chess rules:
//! who controls each side, the AI "thinking" flag, the math challenge gate,
//! hints and telemetry.
//!
//! # Ordering
//!
//! - Human input is ignored while the AI owns the turn or is thinking.
//! - Only one AI turn can be in flight. [`GameController::begin_ai_turn`]
//!   hands out a position snapshot and a token; the result is applied by
//!   [`GameController::finish_ai_turn`] only if the token still matches the
//!   live game. A result computed before `new_game()` or before another move
//!   was played is discarded.
//!
//! ```rust,ignore
//! let mut controller = GameController::new(GameConfig::default(), 7, Arc::new(LogTracker));
//! controller.on_square_click(Square::new(6, 4));
//! controller.on_square_click(Square::new(4, 4));
//! controller.play_ai_turn(&engine).await?;
//! ```

use crate::game::ai::{AIDifficulty, AiMove, EngineError, EngineRequest, GameConfig, MoveEngine};
use crate::game::error::{GameError, GameResult};
use crate::game::hint::{max_hints, HintAnalysis};
use crate::game::math::{MathChallenge, PendingMove};
use crate::game::resources::{AiStats, ClickResult, GameState};
use crate::game::rules::{is_legal_move, move_to_notation};
use crate::game::telemetry::{GameEndRecord, GameTracker, MoveStatRecord};
use crate::game::types::{ChessMove, Square};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use web_time::Instant;

/// Search depth requested when analysing a position for a hint
pub const HINT_ANALYSIS_DEPTH: u32 = 3;

/// Identifies the position an AI turn was computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTurnToken {
    generation: u64,
    history_len: usize,
}

/// Snapshot handed to an engine for one AI turn
#[derive(Debug, Clone)]
pub struct AiTurnRequest {
    pub request: EngineRequest,
    pub token: AiTurnToken,
}

/// What a board click led to
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Click had no effect (not the human's turn, empty square, game over)
    Ignored,
    Selected(Square),
    Deselected,
    Moved(ChessMove),
    /// Move attempt refused; the selection has been cleared
    Rejected(GameError),
    /// Legal move held back until the math challenge is answered
    ChallengeStarted(PendingMove),
}

/// Result of submitting a human move
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    Played(ChessMove),
    ChallengeStarted(PendingMove),
}

/// Drives one game at a time
pub struct GameController {
    state: GameState,
    config: GameConfig,
    math: MathChallenge,
    rng: StdRng,
    tracker: Arc<dyn GameTracker>,
    ai_thinking: bool,
    generation: u64,
    game_id: Uuid,
    started_at: Instant,
    end_recorded: bool,
    hints_used: u32,
}

impl GameController {
    /// New game from the standard position
    ///
    /// `seed` drives math problem generation.
    pub fn new(config: GameConfig, seed: u64, tracker: Arc<dyn GameTracker>) -> Self {
        Self::with_state(config, GameState::new(config.mode), seed, tracker)
    }

    /// Controller around an existing position
    pub fn with_state(
        config: GameConfig,
        state: GameState,
        seed: u64,
        tracker: Arc<dyn GameTracker>,
    ) -> Self {
        let game_id = Uuid::new_v4();
        info!("[GAME] New {} game {}", config.mode, game_id);
        Self {
            state,
            config,
            math: MathChallenge::new(),
            rng: StdRng::seed_from_u64(seed),
            tracker,
            ai_thinking: false,
            generation: 0,
            game_id,
            started_at: Instant::now(),
            end_recorded: false,
            hints_used: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn math(&self) -> &MathChallenge {
        &self.math
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn is_ai_thinking(&self) -> bool {
        self.ai_thinking
    }

    /// True when the side to move belongs to the AI and the game is running
    pub fn is_ai_turn(&self) -> bool {
        !self.state.is_game_over() && self.config.is_ai_side(self.state.current_player)
    }

    pub fn hints_remaining(&self) -> u32 {
        max_hints(self.config.mode, self.config.difficulty).saturating_sub(self.hints_used)
    }

    /// Discard the current game and start a fresh one
    ///
    /// Any AI turn still in flight becomes stale.
    pub fn new_game(&mut self) {
        self.state = GameState::new(self.config.mode);
        self.math.cancel();
        self.math.reset_stats();
        self.ai_thinking = false;
        self.generation += 1;
        self.game_id = Uuid::new_v4();
        self.started_at = Instant::now();
        self.end_recorded = false;
        self.hints_used = 0;
        info!("[GAME] New {} game {}", self.config.mode, self.game_id);
    }

    /// Change the AI strength without restarting the game
    pub fn set_difficulty(&mut self, difficulty: AIDifficulty) {
        self.config.difficulty = difficulty;
    }

    /// Start a new game with different settings
    pub fn reconfigure(&mut self, config: GameConfig) {
        self.config = config;
        self.new_game();
    }

    fn check_human_turn(&self) -> GameResult<()> {
        if self.state.is_game_over() {
            return Err(GameError::GameOver {
                status: self.state.status,
            });
        }
        if self.ai_thinking {
            return Err(GameError::AiThinking);
        }
        if self.config.is_ai_side(self.state.current_player) {
            return Err(GameError::NotYourTurn {
                color: self.state.current_player,
            });
        }
        if self.math.is_active {
            return Err(GameError::ChallengePending);
        }
        Ok(())
    }

    /// Handle a click on the board by the human player
    pub fn on_square_click(&mut self, square: Square) -> ClickOutcome {
        if self.check_human_turn().is_err() {
            return ClickOutcome::Ignored;
        }

        match self.state.handle_square_click(square) {
            None => ClickOutcome::Ignored,
            Some(ClickResult::Selected { square }) => ClickOutcome::Selected(square),
            Some(ClickResult::Deselected) => ClickOutcome::Deselected,
            Some(ClickResult::MoveAttempt { from, to }) => match self.submit_move(from, to) {
                Ok(MoveOutcome::Played(mv)) => ClickOutcome::Moved(mv),
                Ok(MoveOutcome::ChallengeStarted(pending)) => {
                    ClickOutcome::ChallengeStarted(pending)
                }
                Err(e) => {
                    self.state.clear_selection();
                    ClickOutcome::Rejected(e)
                }
            },
        }
    }

    /// Submit a human move
    ///
    /// In `math-master` games a legal move starts a challenge instead of
    /// being played.
    pub fn submit_move(&mut self, from: Square, to: Square) -> GameResult<MoveOutcome> {
        self.check_human_turn()?;

        if self.config.mode.requires_math() {
            if !is_legal_move(self.state.board(), from, to, self.state.last_move()) {
                return Err(GameError::InvalidMove { from, to });
            }
            let pending = PendingMove { from, to };
            let started = self.math.start(
                self.config.mode,
                pending,
                self.state.move_count,
                &mut self.rng,
            );
            if started {
                return Ok(MoveOutcome::ChallengeStarted(pending));
            }
        }

        self.execute_move(from, to, None).map(MoveOutcome::Played)
    }

    /// Answer the active math challenge
    ///
    /// A correct answer plays the pending move. A wrong answer drops it and
    /// clears the selection. Returns `Ok(None)` when nothing was played.
    pub fn answer_challenge(&mut self, answer: i64) -> GameResult<Option<ChessMove>> {
        if !self.math.is_active {
            return Ok(None);
        }

        let correct = self.math.submit_answer(answer);
        match self.math.complete(correct) {
            Some(pending) => match self.execute_move(pending.from, pending.to, None) {
                Ok(mv) => Ok(Some(mv)),
                Err(e) => {
                    warn!("[MATH] Pending move {}-{} failed: {}", pending.from, pending.to, e);
                    self.state.clear_selection();
                    Err(e)
                }
            },
            None => {
                self.state.clear_selection();
                Ok(None)
            }
        }
    }

    pub fn cancel_challenge(&mut self) {
        self.math.cancel();
        self.state.clear_selection();
    }

    /// Claim the turn for the AI and snapshot the position
    ///
    /// Returns `None` unless the AI owns the turn and no AI turn is in flight.
    pub fn begin_ai_turn(&mut self) -> Option<AiTurnRequest> {
        if self.ai_thinking || !self.is_ai_turn() {
            return None;
        }

        self.ai_thinking = true;
        self.state.clear_selection();
        debug!("[AI] Thinking for {}", self.state.current_player);

        Some(AiTurnRequest {
            request: EngineRequest::from_state(&self.state, self.config.difficulty),
            token: self.current_token(),
        })
    }

    fn current_token(&self) -> AiTurnToken {
        AiTurnToken {
            generation: self.generation,
            history_len: self.state.history.len(),
        }
    }

    /// Apply the engine's answer for an AI turn
    ///
    /// The result is discarded with [`GameError::StaleAiResult`] if the game
    /// changed since [`Self::begin_ai_turn`].
    pub fn finish_ai_turn(
        &mut self,
        token: AiTurnToken,
        result: Result<AiMove, EngineError>,
    ) -> GameResult<ChessMove> {
        if token != self.current_token() {
            debug!("[AI] Discarding result computed for an old position");
            return Err(GameError::StaleAiResult);
        }
        self.ai_thinking = false;

        let ai_move = result.map_err(|e| GameError::EngineFailed(e.to_string()))?;
        let mv = self.execute_move(ai_move.from, ai_move.to, Some(ai_move.thinking_time_ms))?;
        self.state.set_ai_stats(AiStats {
            score: ai_move.score,
            thinking_time_ms: ai_move.thinking_time_ms,
            depth: ai_move.depth,
            engine: ai_move.engine,
        });
        Ok(mv)
    }

    /// Run a complete AI turn with `engine`
    ///
    /// Returns `Ok(None)` when it isn't the AI's turn.
    pub async fn play_ai_turn<E: MoveEngine + ?Sized>(
        &mut self,
        engine: &E,
    ) -> GameResult<Option<ChessMove>> {
        let Some(turn) = self.begin_ai_turn() else {
            return Ok(None);
        };
        let result = engine.choose_move(&turn.request).await;
        self.finish_ai_turn(turn.token, result).map(Some)
    }

    /// Suggest a move for the side to move
    ///
    /// Evaluation, threats and opportunities come from the engine's position
    /// analysis when it has one; otherwise the suggested move's score is used
    /// and both lists stay empty.
    pub async fn request_hint<E: MoveEngine + ?Sized>(
        &mut self,
        engine: &E,
    ) -> GameResult<HintAnalysis> {
        if self.state.is_game_over() {
            return Err(GameError::GameOver {
                status: self.state.status,
            });
        }
        if self.hints_remaining() == 0 {
            return Err(GameError::NoHintsLeft);
        }

        let request = EngineRequest::from_state(&self.state, self.config.difficulty);
        let suggestion = engine
            .choose_move(&request)
            .await
            .map_err(|e| GameError::EngineFailed(e.to_string()))?;

        let hint = match engine.analyze(&request, HINT_ANALYSIS_DEPTH).await {
            Some(analysis) => HintAnalysis::new(
                Some(&suggestion),
                analysis.evaluation,
                analysis.threats,
                analysis.weaknesses,
            ),
            None => {
                debug!("[AI] No analysis from {}, hint uses move score", engine.name());
                HintAnalysis::new(Some(&suggestion), suggestion.score, Vec::new(), Vec::new())
            }
        };

        self.hints_used += 1;
        Ok(hint)
    }

    /// Advance the clock of the side to move
    pub fn tick(&mut self, elapsed_secs: f32) -> bool {
        let timed_out = self.state.tick(elapsed_secs);
        if timed_out {
            self.math.cancel();
            self.record_game_end();
        }
        timed_out
    }

    /// The side to move resigns
    pub fn resign(&mut self) -> bool {
        let resigned = self.state.resign();
        if resigned {
            self.math.cancel();
            self.record_game_end();
        }
        resigned
    }

    fn execute_move(
        &mut self,
        from: Square,
        to: Square,
        thinking_ms: Option<u64>,
    ) -> GameResult<ChessMove> {
        let move_number = self.state.move_count;
        let mv = self.state.make_move(from, to)?;

        self.tracker.record_move(&MoveStatRecord {
            game_id: self.game_id,
            move_number,
            player: mv.piece.color,
            notation: move_to_notation(&mv),
            captured: mv.captured,
            thinking_ms,
        });

        if self.state.is_game_over() {
            self.record_game_end();
        }
        Ok(mv)
    }

    fn record_game_end(&mut self) {
        if self.end_recorded {
            return;
        }
        self.end_recorded = true;

        let math_accuracy = self
            .config
            .mode
            .requires_math()
            .then(|| self.math.accuracy());

        self.tracker.record_game_end(&GameEndRecord {
            game_id: self.game_id,
            status: self.state.status,
            winner: self.state.winner(),
            total_moves: self.state.history.len(),
            duration_secs: self.started_at.elapsed().as_secs_f64(),
            mode: self.config.mode,
            math_accuracy,
        });
    }
}
