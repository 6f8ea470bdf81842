//! Move hints
//!
//! A hint is a suggested move plus a short piece of advice derived from the
//! position evaluation. The number of hints per game depends on mode and
//! difficulty.

use crate::game::ai::{AIDifficulty, AiMove, GameMode};
use crate::game::types::Square;
use serde::{Deserialize, Serialize};

/// Analysis shown to the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HintAnalysis {
    pub best_move: Option<(Square, Square)>,
    /// Positive favours the side asking for the hint
    pub evaluation: f64,
    pub threats: Vec<String>,
    pub opportunities: Vec<String>,
    pub advice: String,
}

impl HintAnalysis {
    /// Hint built from an engine move and optional position analysis
    pub fn new(
        best_move: Option<&AiMove>,
        evaluation: f64,
        threats: Vec<String>,
        opportunities: Vec<String>,
    ) -> Self {
        let advice = generate_advice(evaluation, &threats, &opportunities);
        Self {
            best_move: best_move.map(|mv| (mv.from, mv.to)),
            evaluation,
            threats,
            opportunities,
            advice,
        }
    }
}

/// Hints allowed per game
///
/// Easy games are effectively unlimited.
pub fn max_hints(mode: GameMode, difficulty: AIDifficulty) -> u32 {
    if difficulty == AIDifficulty::Easy {
        return 999;
    }
    if mode == GameMode::Speed {
        return 1;
    }
    match difficulty {
        AIDifficulty::Medium => 5,
        _ => 3,
    }
}

/// One-line advice for an evaluation in centipawn-like units
pub fn generate_advice(evaluation: f64, threats: &[String], opportunities: &[String]) -> String {
    let advice = if evaluation.abs() > 500.0 {
        if evaluation > 0.0 {
            "You have a winning advantage! Look for tactics to finish the game."
        } else {
            "You're in trouble. Focus on defense and look for counterplay."
        }
    } else if evaluation.abs() > 200.0 {
        if evaluation > 0.0 {
            "You have a good position. Maintain pressure."
        } else {
            "You're slightly worse. Look for active moves."
        }
    } else if !threats.is_empty() {
        "Be careful of opponent threats. Consider defensive moves."
    } else if !opportunities.is_empty() {
        "You have tactical opportunities available!"
    } else {
        "The position is balanced. Focus on piece development and king safety."
    };
    advice.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_hints() {
        assert_eq!(max_hints(GameMode::Speed, AIDifficulty::Easy), 999);
        assert_eq!(max_hints(GameMode::Speed, AIDifficulty::Hard), 1);
        assert_eq!(max_hints(GameMode::Classic, AIDifficulty::Medium), 5);
        assert_eq!(max_hints(GameMode::Classic, AIDifficulty::Hard), 3);
    }

    #[test]
    fn test_advice_thresholds() {
        assert!(generate_advice(900.0, &[], &[]).starts_with("You have a winning"));
        assert!(generate_advice(-300.0, &[], &[]).starts_with("You're slightly worse"));
        assert!(generate_advice(0.0, &["Qxf7".to_string()], &[]).starts_with("Be careful"));
        assert!(generate_advice(0.0, &[], &[]).starts_with("The position is balanced"));
    }
}
