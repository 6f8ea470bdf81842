//! Math challenges gating moves in `math-master` games

pub mod challenge;
pub mod problem;

pub use challenge::{MathChallenge, PendingMove};
pub use problem::{generate_math_problem, MathDifficulty, MathProblem, ProblemKind};
