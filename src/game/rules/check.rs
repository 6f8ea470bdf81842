//! Check detection
//!
//! Full board scans, no caching. At 8x8 the worst case is 64 attackers times
//! one pattern test each, which is cheap enough to run on every query.

use super::board_state::Board;
use super::piece_moves::is_valid_move;
use crate::game::types::{Color, Square};

/// True if any `attacker` piece has a pseudo-legal move onto `square`
///
/// Attacks ignore en passant and whether the attacker would expose its own
/// king.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    board
        .pieces_of(attacker)
        .any(|(from, _)| is_valid_move(board, from, square, None))
}

/// True if `color`'s king is attacked by the other side
///
/// A board with no king for `color` counts as check. Only malformed boards
/// get there; legal play never removes a king.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.opponent()),
        None => true,
    }
}
