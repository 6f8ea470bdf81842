//! AI and game configuration
//!
//! Configures who plays which side, how strong the AI is, and which game mode
//! (clock and math-challenge rules) is in force. These values are passed
//! explicitly into the game entry points instead of being read from global
//! state.
//!
//! # Game Modes
//!
//! | Mode          | Clock   | Increment | Math gate |
//! |---------------|---------|-----------|-----------|
//! | `classic`     | 10 min  | none      | no        |
//! | `speed`       | 3 min   | +2 s      | no        |
//! | `math-master` | 10 min  | none      | yes       |
//! | `ranked`      | 10 min  | none      | no        |
//! | `royale`      | 10 min  | none      | no        |
//!
//! # Difficulty Levels
//!
//! Difficulty selects the evaluation terms of the heuristic generator (see
//! [`crate::game::ai::evaluation`]) and the time budget handed to an external
//! engine:
//!
//! | Difficulty | Engine time limit | Local behaviour                     |
//! |------------|-------------------|-------------------------------------|
//! | Easy       | 1 s               | uniform random legal move           |
//! | Medium     | 2 s               | material + blunder check            |
//! | Hard       | 3 s               | + centre, development, king safety  |

use crate::game::types::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// AI strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AIDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl AIDifficulty {
    /// Seconds an external engine may spend on one move
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = MoveRequest { time_limit: AIDifficulty::Hard.time_limit_secs(), .. };
    /// ```
    pub fn time_limit_secs(self) -> u64 {
        match self {
            AIDifficulty::Easy => 1,
            AIDifficulty::Medium => 2,
            AIDifficulty::Hard => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AIDifficulty::Easy => "easy",
            AIDifficulty::Medium => "medium",
            AIDifficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for AIDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AIDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(AIDifficulty::Easy),
            "medium" => Ok(AIDifficulty::Medium),
            "hard" => Ok(AIDifficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{}' (expected easy, medium or hard)",
                other
            )),
        }
    }
}

/// Game mode selection
///
/// Modes differ only in clock settings and in whether human moves must pass a
/// math challenge first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    Classic,
    /// Three-minute blitz with a two-second increment
    Speed,
    /// Every human move is gated by a math problem
    MathMaster,
    Ranked,
    Royale,
}

impl GameMode {
    /// Starting time per side, in seconds
    pub fn initial_clock_secs(self) -> f32 {
        match self {
            GameMode::Speed => 180.0,
            _ => 600.0,
        }
    }

    /// Bonus added to the mover's clock after each accepted move
    pub fn increment_secs(self) -> f32 {
        match self {
            GameMode::Speed => 2.0,
            _ => 0.0,
        }
    }

    pub fn requires_math(self) -> bool {
        self == GameMode::MathMaster
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Speed => "speed",
            GameMode::MathMaster => "math-master",
            GameMode::Ranked => "ranked",
            GameMode::Royale => "royale",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(GameMode::Classic),
            "speed" => Ok(GameMode::Speed),
            "math-master" | "mathmaster" => Ok(GameMode::MathMaster),
            "ranked" => Ok(GameMode::Ranked),
            "royale" => Ok(GameMode::Royale),
            other => Err(format!("unknown game mode '{}'", other)),
        }
    }
}

/// Who plays the side the human doesn't
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// Local hot-seat, both sides clicked by humans
    Human,
    #[default]
    Ai,
    /// The AI plays both sides
    Selfplay,
}

/// Everything the controller needs to know about a game before it starts
///
/// # Examples
///
/// ```rust,ignore
/// let config = GameConfig {
///     mode: GameMode::Speed,
///     difficulty: AIDifficulty::Hard,
///     opponent: Opponent::Ai,
///     player_color: Color::White,
/// };
/// assert_eq!(config.ai_color(), Some(Color::Black));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: AIDifficulty,
    pub opponent: Opponent,
    /// Side the human plays against the AI
    pub player_color: Color,
}

impl Default for GameConfig {
    /// Classic game, human White against a medium AI
    fn default() -> Self {
        Self {
            mode: GameMode::Classic,
            difficulty: AIDifficulty::Medium,
            opponent: Opponent::Ai,
            player_color: Color::White,
        }
    }
}

impl GameConfig {
    /// The colour the AI plays, if there is an AI opponent
    pub fn ai_color(&self) -> Option<Color> {
        match self.opponent {
            Opponent::Ai => Some(self.player_color.opponent()),
            Opponent::Human | Opponent::Selfplay => None,
        }
    }

    /// True when `color` is moved by the AI
    pub fn is_ai_side(&self, color: Color) -> bool {
        self.opponent == Opponent::Selfplay || self.ai_color() == Some(color)
    }
}
