//! Static move evaluation
//!
//! Scores a single legal move without recursive search. The only lookahead is
//! one ply of opponent replies, used to decide whether the destination square
//! can be recaptured.
//!
//! # Terms
//!
//! | Term                          | Medium         | Hard           |
//! |-------------------------------|----------------|----------------|
//! | Material captured             | value x 10     | value x 10     |
//! | Destination attacked          | - value x 5    | - value x 1    |
//! | Lands on d4/e4/d5/e5          |                | +1.5           |
//! | Develops a back-rank piece    |                | +2             |
//! | King safety differential      |                | 0.5 x theirs - ours |
//! | Gives check                   |                | +2.5           |
//!
//! Piece values are the usual 1/3/3/5/9 pawn units scaled by ten.

use crate::game::ai::AIDifficulty;
use crate::game::rules::{is_king_in_check, is_valid_move, Board, LegalMove};
use crate::game::types::{Color, PieceKind, Square};

/// Material value of a piece kind; kings are never captured
pub fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 10.0,
        PieceKind::Knight => 30.0,
        PieceKind::Bishop => 30.0,
        PieceKind::Rook => 50.0,
        PieceKind::Queen => 90.0,
        PieceKind::King => 0.0,
    }
}

pub const CAPTURE_WEIGHT: f64 = 10.0;
pub const CENTER_BONUS: f64 = 1.5;
pub const DEVELOPMENT_BONUS: f64 = 2.0;
pub const CHECK_BONUS: f64 = 2.5;
/// Weight on the danger around the opponent's king
pub const ATTACK_WEIGHT: f64 = 0.5;
/// Chebyshev radius around a king that counts toward its danger
pub const KING_ZONE_RADIUS: u8 = 2;

fn blunder_weight(difficulty: AIDifficulty) -> f64 {
    match difficulty {
        AIDifficulty::Hard => 1.0,
        _ => 5.0,
    }
}

/// One of the four central squares
pub fn is_center(square: Square) -> bool {
    (3..=4).contains(&square.row) && (3..=4).contains(&square.col)
}

/// True if `attacker` has a legal reply landing on `square`
///
/// Unlike [`crate::game::rules::is_square_attacked`], a pinned attacker does
/// not count. The board is restored before returning.
pub fn is_destination_attacked(board: &mut Board, square: Square, attacker: Color) -> bool {
    let attackers: Vec<Square> = board
        .pieces_of(attacker)
        .map(|(from, _)| from)
        .filter(|&from| is_valid_move(board, from, square, None))
        .collect();

    attackers.into_iter().any(|from| {
        let undo = board.apply(from, square);
        let legal = !is_king_in_check(board, attacker);
        board.revert(undo);
        legal
    })
}

/// Enemy pressure around `color`'s king
///
/// Sums `value / distance` over enemy pieces within [`KING_ZONE_RADIUS`] of
/// the king. A missing king has no danger.
pub fn king_danger(board: &Board, color: Color) -> f64 {
    let Some(king) = board.find_king(color) else {
        return 0.0;
    };

    board
        .pieces_of(color.opponent())
        .filter(|(square, _)| {
            let distance = square.chebyshev_distance(king);
            distance > 0 && distance <= KING_ZONE_RADIUS
        })
        .map(|(square, piece)| piece_value(piece.kind) / square.euclidean_distance(king))
        .sum()
}

/// Score `mv` for `player` at the given difficulty
///
/// Easy always scores 0. The board is simulated on and restored.
pub fn score_move(
    board: &mut Board,
    player: Color,
    mv: &LegalMove,
    difficulty: AIDifficulty,
) -> f64 {
    if difficulty == AIDifficulty::Easy {
        return 0.0;
    }

    let Some(moving) = board.get(mv.from) else {
        return f64::NEG_INFINITY;
    };
    let opponent = player.opponent();
    let moving_value = piece_value(moving.kind);

    let undo = board.apply(mv.from, mv.to);

    let mut score = mv
        .captured
        .map_or(0.0, |piece| piece_value(piece.kind) * CAPTURE_WEIGHT);

    if is_destination_attacked(board, mv.to, opponent) {
        score -= moving_value * blunder_weight(difficulty);
    }

    if difficulty == AIDifficulty::Hard {
        if is_center(mv.to) {
            score += CENTER_BONUS;
        }

        if mv.from.row == player.back_row()
            && !matches!(moving.kind, PieceKind::Pawn | PieceKind::King)
        {
            score += DEVELOPMENT_BONUS;
        }

        score += ATTACK_WEIGHT * king_danger(board, opponent) - king_danger(board, player);

        if is_king_in_check(board, opponent) {
            score += CHECK_BONUS;
        }
    }

    board.revert(undo);
    score
}
