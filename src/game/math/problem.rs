//! Math problem generation
//!
//! Problems come in three families and three difficulty tiers. Every
//! problem has an integer answer.
//!
//! | Tier   | Families                      | Example               |
//! |--------|-------------------------------|-----------------------|
//! | Easy   | arithmetic                    | `7 × 12`              |
//! | Medium | algebraic, mixed              | `x + 9 = 21`          |
//! | Hard   | algebraic, mixed              | `(4 + 7) × 3 - 2`     |
//!
//! Medium and hard pick uniformly among all three families; an arithmetic
//! pick produces a mixed problem at those tiers.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier of a math problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl MathDifficulty {
    /// Tier for the given full-move number: up to 10 easy, up to 20 medium
    pub fn for_move_count(move_count: u32) -> Self {
        match move_count {
            0..=10 => MathDifficulty::Easy,
            11..=20 => MathDifficulty::Medium,
            _ => MathDifficulty::Hard,
        }
    }
}

impl fmt::Display for MathDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MathDifficulty::Easy => "easy",
            MathDifficulty::Medium => "medium",
            MathDifficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for MathDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(MathDifficulty::Easy),
            "medium" => Ok(MathDifficulty::Medium),
            "hard" => Ok(MathDifficulty::Hard),
            other => Err(format!("unknown math difficulty '{}'", other)),
        }
    }
}

/// Problem family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    Arithmetic,
    Algebraic,
    Mixed,
}

/// A generated problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathProblem {
    pub question: String,
    pub answer: i64,
    pub kind: ProblemKind,
    /// Worked solution, for algebraic problems
    pub explanation: Option<String>,
}

impl MathProblem {
    fn new(question: String, answer: i64, kind: ProblemKind) -> Self {
        Self {
            question,
            answer,
            kind,
            explanation: None,
        }
    }

    pub fn check(&self, answer: i64) -> bool {
        self.answer == answer
    }
}

/// Generate a problem of the given tier
pub fn generate_math_problem<R: Rng + ?Sized>(difficulty: MathDifficulty, rng: &mut R) -> MathProblem {
    match difficulty {
        MathDifficulty::Easy => easy_arithmetic(rng),
        MathDifficulty::Medium => match pick_kind(rng) {
            ProblemKind::Algebraic => medium_algebraic(rng),
            _ => medium_mixed(rng),
        },
        MathDifficulty::Hard => match pick_kind(rng) {
            ProblemKind::Algebraic => hard_algebraic(rng),
            _ => hard_mixed(rng),
        },
    }
}

fn pick_kind<R: Rng + ?Sized>(rng: &mut R) -> ProblemKind {
    match rng.random_range(0..3) {
        0 => ProblemKind::Arithmetic,
        1 => ProblemKind::Algebraic,
        _ => ProblemKind::Mixed,
    }
}

fn easy_arithmetic<R: Rng + ?Sized>(rng: &mut R) -> MathProblem {
    let a: i64 = rng.random_range(1..=15);
    let b: i64 = rng.random_range(1..=15);

    match rng.random_range(0..3) {
        0 => MathProblem::new(format!("{} + {}", a, b), a + b, ProblemKind::Arithmetic),
        1 => {
            let (larger, smaller) = (a.max(b), a.min(b));
            MathProblem::new(
                format!("{} - {}", larger, smaller),
                larger - smaller,
                ProblemKind::Arithmetic,
            )
        }
        _ => MathProblem::new(format!("{} × {}", a, b), a * b, ProblemKind::Arithmetic),
    }
}

fn medium_algebraic<R: Rng + ?Sized>(rng: &mut R) -> MathProblem {
    let a: i64 = rng.random_range(1..=20);
    let x: i64 = rng.random_range(1..=15);
    let b = x + a;

    MathProblem {
        question: format!("x + {} = {}", a, b),
        answer: x,
        kind: ProblemKind::Algebraic,
        explanation: Some(format!("x = {} - {} = {}", b, a, x)),
    }
}

fn medium_mixed<R: Rng + ?Sized>(rng: &mut R) -> MathProblem {
    let a: i64 = rng.random_range(2..=13);
    let b: i64 = rng.random_range(2..=9);
    let c: i64 = rng.random_range(1..=10);
    let dividend = a * b;

    let (question, answer) = match rng.random_range(0..4) {
        0 => (format!("{} × {} + {}", a, b, c), a * b + c),
        1 => (format!("{} × {} - {}", a, b, c), a * b - c),
        2 => (format!("{} ÷ {} + {}", dividend, b, c), a + c),
        _ => (format!("{} ÷ {} - {}", dividend, b, c), a - c),
    };
    MathProblem::new(question, answer, ProblemKind::Mixed)
}

fn hard_algebraic<R: Rng + ?Sized>(rng: &mut R) -> MathProblem {
    let a: i64 = rng.random_range(2..=9);
    let x: i64 = rng.random_range(1..=10);
    let b: i64 = rng.random_range(1..=15);
    let c = a * x + b;

    MathProblem {
        question: format!("{}x + {} = {}", a, b, c),
        answer: x,
        kind: ProblemKind::Algebraic,
        explanation: Some(format!("x = ({} - {}) ÷ {} = {}", c, b, a, x)),
    }
}

fn hard_mixed<R: Rng + ?Sized>(rng: &mut R) -> MathProblem {
    let a: i64 = rng.random_range(2..=9);
    let b: i64 = rng.random_range(2..=9);
    let c: i64 = rng.random_range(2..=7);
    let d: i64 = rng.random_range(1..=5);

    let (question, answer) = match rng.random_range(0..4) {
        0 => (format!("({} + {}) × {} - {}", a, b, c, d), (a + b) * c - d),
        1 => (format!("{} × ({} + {}) - {}", a, b, c, d), a * (b + c) - d),
        2 => (format!("({} × {}) ÷ {} + {}", a, b, c, d), (a * b).div_euclid(c) + d),
        _ => (format!("{}² - {}", a, b), a * a - b),
    };
    MathProblem::new(question, answer, ProblemKind::Mixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_difficulty_by_move_count() {
        assert_eq!(MathDifficulty::for_move_count(1), MathDifficulty::Easy);
        assert_eq!(MathDifficulty::for_move_count(10), MathDifficulty::Easy);
        assert_eq!(MathDifficulty::for_move_count(11), MathDifficulty::Medium);
        assert_eq!(MathDifficulty::for_move_count(20), MathDifficulty::Medium);
        assert_eq!(MathDifficulty::for_move_count(21), MathDifficulty::Hard);
    }

    #[test]
    fn test_easy_is_always_arithmetic() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let problem = generate_math_problem(MathDifficulty::Easy, &mut rng);
            assert_eq!(problem.kind, ProblemKind::Arithmetic);
            assert!(problem.answer >= 0, "{} = {}", problem.question, problem.answer);
            assert!(problem.answer <= 225);
        }
    }

    #[test]
    fn test_medium_and_hard_never_arithmetic() {
        let mut rng = StdRng::seed_from_u64(11);
        for difficulty in [MathDifficulty::Medium, MathDifficulty::Hard] {
            for _ in 0..200 {
                let problem = generate_math_problem(difficulty, &mut rng);
                assert_ne!(problem.kind, ProblemKind::Arithmetic);
                if problem.kind == ProblemKind::Algebraic {
                    assert!(problem.explanation.is_some());
                }
            }
        }
    }

    #[test]
    fn test_algebraic_answers_solve_the_equation() {
        //! Substituting the answer back into `ax + b = c` must hold
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let problem = hard_algebraic(&mut rng);
            let (lhs, rhs) = problem.question.split_once(" = ").unwrap();
            let (ax, b) = lhs.split_once("x + ").unwrap();
            let a: i64 = ax.parse().unwrap();
            let b: i64 = b.parse().unwrap();
            let c: i64 = rhs.parse().unwrap();
            assert_eq!(a * problem.answer + b, c);
        }
    }

    #[test]
    fn test_check_answer() {
        let problem = MathProblem::new("2 + 2".to_string(), 4, ProblemKind::Arithmetic);
        assert!(problem.check(4));
        assert!(!problem.check(5));
    }
}
