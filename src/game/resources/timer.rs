//! Game clock
//!
//! Per-side countdown clock with an optional Fischer increment, configured
//! from the [`GameMode`].

use crate::game::ai::GameMode;
use crate::game::types::Color;
use serde::{Deserialize, Serialize};

/// Remaining time for both sides, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    pub white_time_left: f32,
    pub black_time_left: f32,
    /// Fischer increment added after each accepted move
    pub increment: f32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::for_mode(GameMode::Classic)
    }
}

impl GameClock {
    pub fn for_mode(mode: GameMode) -> Self {
        let initial = mode.initial_clock_secs();
        Self {
            white_time_left: initial,
            black_time_left: initial,
            increment: mode.increment_secs(),
        }
    }

    pub fn time_left(&self, color: Color) -> f32 {
        match color {
            Color::White => self.white_time_left,
            Color::Black => self.black_time_left,
        }
    }

    fn time_left_mut(&mut self, color: Color) -> &mut f32 {
        match color {
            Color::White => &mut self.white_time_left,
            Color::Black => &mut self.black_time_left,
        }
    }

    /// Subtract `elapsed` seconds from `color`'s clock
    ///
    /// Clamps at zero and returns true when the flag fell.
    pub fn consume(&mut self, color: Color, elapsed: f32) -> bool {
        let left = self.time_left_mut(color);
        *left -= elapsed;
        if *left <= 0.0 {
            *left = 0.0;
            true
        } else {
            false
        }
    }

    /// Credit the increment to the side that just moved
    pub fn apply_increment(&mut self, color: Color) {
        if self.increment > 0.0 {
            *self.time_left_mut(color) += self.increment;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_for_modes() {
        let speed = GameClock::for_mode(GameMode::Speed);
        assert_eq!(speed.white_time_left, 180.0);
        assert_eq!(speed.increment, 2.0);

        let classic = GameClock::default();
        assert_eq!(classic.black_time_left, 600.0);
        assert_eq!(classic.increment, 0.0);
    }

    #[test]
    fn test_consume_flags_at_zero() {
        let mut clock = GameClock::for_mode(GameMode::Speed);
        assert!(!clock.consume(Color::White, 179.5));
        assert!(clock.consume(Color::White, 1.0));
        assert_eq!(clock.time_left(Color::White), 0.0);
        assert_eq!(clock.time_left(Color::Black), 180.0);
    }

    #[test]
    fn test_increment_only_in_speed() {
        let mut speed = GameClock::for_mode(GameMode::Speed);
        speed.apply_increment(Color::Black);
        assert_eq!(speed.black_time_left, 182.0);

        let mut classic = GameClock::for_mode(GameMode::Classic);
        classic.apply_increment(Color::Black);
        assert_eq!(classic.black_time_left, 600.0);
    }
}
