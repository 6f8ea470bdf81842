//! Math challenge gate
//!
//! In `math-master` games a human move is held back until the player solves
//! a problem. [`MathChallenge`] keeps the pending move, the active problem and
//! the running accuracy statistics.

use super::problem::{generate_math_problem, MathDifficulty, MathProblem};
use crate::game::ai::GameMode;
use crate::game::types::Square;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Move waiting for a correct answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMove {
    pub from: Square,
    pub to: Square,
}

/// Challenge state and statistics for one game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathChallenge {
    pub is_active: bool,
    pub pending_move: Option<PendingMove>,
    pub difficulty: MathDifficulty,
    pub problem: Option<MathProblem>,
    pub correct_answers: u32,
    pub total_attempts: u32,
    /// Consecutive correct answers
    pub streak: u32,
}

impl MathChallenge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `pending` behind a new problem
    ///
    /// Only activates in [`GameMode::MathMaster`]; returns whether a challenge
    /// was started.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        mode: GameMode,
        pending: PendingMove,
        move_count: u32,
        rng: &mut R,
    ) -> bool {
        if !mode.requires_math() {
            return false;
        }

        self.difficulty = MathDifficulty::for_move_count(move_count);
        let problem = generate_math_problem(self.difficulty, rng);
        debug!(
            "[MATH] {} challenge for {}-{}: {}",
            self.difficulty, pending.from, pending.to, problem.question
        );

        self.is_active = true;
        self.pending_move = Some(pending);
        self.problem = Some(problem);
        true
    }

    /// Check an answer against the active problem without recording it
    pub fn submit_answer(&self, answer: i64) -> bool {
        self.is_active && self.problem.as_ref().is_some_and(|p| p.check(answer))
    }

    /// Close the active challenge and record the attempt
    ///
    /// Returns the pending move on success so the caller can execute it.
    pub fn complete(&mut self, success: bool) -> Option<PendingMove> {
        self.is_active = false;
        self.problem = None;
        self.total_attempts += 1;

        let pending = self.pending_move.take();
        if success {
            self.correct_answers += 1;
            self.streak += 1;
            info!(
                "[MATH] Correct ({}/{}, streak {})",
                self.correct_answers, self.total_attempts, self.streak
            );
            pending
        } else {
            self.streak = 0;
            info!("[MATH] Wrong answer ({}/{})", self.correct_answers, self.total_attempts);
            None
        }
    }

    /// Abandon the active challenge without recording an attempt
    pub fn cancel(&mut self) {
        self.is_active = false;
        self.pending_move = None;
        self.problem = None;
    }

    pub fn reset_stats(&mut self) {
        self.correct_answers = 0;
        self.total_attempts = 0;
        self.streak = 0;
    }

    /// Percentage of correct answers, rounded; 100 before any attempt
    pub fn accuracy(&self) -> u32 {
        if self.total_attempts == 0 {
            return 100;
        }
        (f64::from(self.correct_answers) / f64::from(self.total_attempts) * 100.0).round() as u32
    }
}
