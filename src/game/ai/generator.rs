//! Heuristic AI move generator
//!
//! Picks a move for the side to move from the full list of legal moves:
//!
//! - **Easy**: uniform random move, score 0
//! - **Medium / Hard**: every move is scored by [`score_move`] and one of the
//!   best-scoring moves is picked at random
//! - **Medium** additionally falls back to a uniform random move when the best
//!   score is not positive
//!
//! All randomness comes from the caller's RNG so games can be replayed from a
//! seed.

use super::evaluation::score_move;
use super::AIDifficulty;
use crate::game::rules::{legal_moves, Board};
use crate::game::types::{ChessMove, Color, Piece, Square};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use web_time::Instant;

/// Move chosen by an engine, with search statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiMove {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub score: f64,
    /// Wall-clock time spent choosing, in milliseconds
    pub thinking_time_ms: u64,
    /// Search depth, for engines that search
    pub depth: Option<u32>,
    /// Engine that produced the move
    pub engine: String,
}

/// Name reported by moves from the in-process generator
pub const LOCAL_ENGINE_NAME: &str = "local";

/// Choose a move for `player`
///
/// Returns `None` when `player` has no legal move.
pub fn generate_ai_move<R: Rng + ?Sized>(
    board: &Board,
    player: Color,
    difficulty: AIDifficulty,
    last_move: Option<&ChessMove>,
    rng: &mut R,
) -> Option<AiMove> {
    let start = Instant::now();
    let candidates = legal_moves(board, player, last_move);
    if candidates.is_empty() {
        return None;
    }

    let (chosen, score) = if difficulty == AIDifficulty::Easy {
        (candidates[rng.random_range(0..candidates.len())], 0.0)
    } else {
        let mut scratch = *board;
        let mut best_score = f64::NEG_INFINITY;
        let mut best = Vec::new();

        for mv in &candidates {
            let score = score_move(&mut scratch, player, mv, difficulty);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(*mv);
            } else if score == best_score {
                best.push(*mv);
            }
        }

        if difficulty == AIDifficulty::Medium && best_score <= 0.0 {
            let mv = candidates[rng.random_range(0..candidates.len())];
            let score = score_move(&mut scratch, player, &mv, difficulty);
            (mv, score)
        } else {
            (best[rng.random_range(0..best.len())], best_score)
        }
    };

    let thinking_time_ms = start.elapsed().as_millis() as u64;
    debug!(
        "[AI] {} ({}) chose {}-{} score={:.2} from {} candidates in {}ms",
        player,
        difficulty,
        chosen.from,
        chosen.to,
        score,
        candidates.len(),
        thinking_time_ms
    );

    Some(AiMove {
        from: chosen.from,
        to: chosen.to,
        captured: chosen.captured,
        score,
        thinking_time_ms,
        depth: None,
        engine: LOCAL_ENGINE_NAME.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::GameMode;
    use crate::game::resources::GameState;
    use crate::game::rules::is_legal_move;
    use crate::game::types::{PieceKind, Square};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    /// Rook on d1 can take the queen on d5; nothing else captures or checks
    fn queen_hangs() -> Board {
        Board::from_pieces(&[
            ("wk", "a1"),
            ("wr", "d1"),
            ("bq", "d5"),
            ("bk", "h8"),
            ("bp", "g7"),
            ("bp", "h7"),
        ])
    }

    #[test]
    fn test_no_legal_moves_returns_none() {
        let board = Board::from_pieces(&[("wk", "h1"), ("bk", "f2"), ("bq", "g3")]);
        let mut rng = StdRng::seed_from_u64(1);
        for difficulty in [AIDifficulty::Easy, AIDifficulty::Medium, AIDifficulty::Hard] {
            assert!(generate_ai_move(&board, Color::White, difficulty, None, &mut rng).is_none());
        }
    }

    #[test]
    fn test_hard_prefers_material() {
        //! Exactly one move wins the queen; hard must find it every time
        let board = queen_hangs();
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = generate_ai_move(&board, Color::White, AIDifficulty::Hard, None, &mut rng)
                .expect("white has moves");
            assert_eq!((mv.from, mv.to), (sq("d1"), sq("d5")));
            assert_eq!(
                mv.captured.map(|p| p.kind),
                Some(PieceKind::Queen),
                "Captured piece is reported"
            );
            assert!(mv.score >= 890.0);
        }
    }

    #[test]
    fn test_medium_prefers_material() {
        let board = queen_hangs();
        let mut rng = StdRng::seed_from_u64(7);
        let mv = generate_ai_move(&board, Color::White, AIDifficulty::Medium, None, &mut rng)
            .expect("white has moves");
        assert_eq!((mv.from, mv.to), (sq("d1"), sq("d5")));
        assert_eq!(mv.engine, LOCAL_ENGINE_NAME);
    }

    #[test]
    fn test_medium_random_when_nothing_scores() {
        //! Best score is 0, so medium picks uniformly and sometimes hangs the knight
        let board = Board::from_pieces(&[("wk", "a1"), ("wn", "g1"), ("bp", "g4"), ("bk", "h8")]);
        let mut saw_negative = false;

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = generate_ai_move(&board, Color::White, AIDifficulty::Medium, None, &mut rng)
                .expect("white has moves");
            assert!(is_legal_move(&board, mv.from, mv.to, None));
            if mv.score < 0.0 {
                assert_eq!(mv.score, -150.0);
                assert_eq!(mv.from, sq("g1"));
                saw_negative = true;
            } else {
                assert_eq!(mv.score, 0.0);
            }
        }

        assert!(saw_negative, "Uniform fallback never chose a losing move");
    }

    #[test]
    fn test_easy_scores_zero_and_is_seeded() {
        let board = Board::standard();
        let a = generate_ai_move(
            &board,
            Color::White,
            AIDifficulty::Easy,
            None,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        let b = generate_ai_move(
            &board,
            Color::White,
            AIDifficulty::Easy,
            None,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();

        assert_eq!(a.score, 0.0);
        assert_eq!((a.from, a.to), (b.from, b.to), "Same seed, same move");
    }

    #[test]
    fn test_easy_never_returns_illegal_move() {
        //! 100 positions from seeded random playouts
        let mut rng = StdRng::seed_from_u64(2024);
        let mut checked = 0;

        while checked < 100 {
            let mut state = GameState::new(GameMode::Classic);
            let plies = rng.random_range(0..40);

            for _ in 0..plies {
                if state.is_game_over() {
                    break;
                }
                let mv = generate_ai_move(
                    state.board(),
                    state.current_player,
                    AIDifficulty::Easy,
                    state.last_move(),
                    &mut rng,
                )
                .expect("non-terminal position has a move");
                state.make_move(mv.from, mv.to).expect("generated move is legal");
            }

            if state.is_game_over() {
                continue;
            }

            let mv = generate_ai_move(
                state.board(),
                state.current_player,
                AIDifficulty::Easy,
                state.last_move(),
                &mut rng,
            )
            .expect("non-terminal position has a move");
            assert!(
                is_legal_move(state.board(), mv.from, mv.to, state.last_move()),
                "{}-{} is not legal",
                mv.from,
                mv.to
            );
            checked += 1;
        }
    }
}
