//! Legal move enumeration
//!
//! A fully legal move is a pseudo-legal one that doesn't leave the mover's
//! own king attacked. Each candidate is tested by applying it to the board,
//! running the check detector, and reverting.

use super::board_state::Board;
use super::check::is_king_in_check;
use super::piece_moves::is_valid_move;
use crate::game::types::{ChessMove, Color, Piece, Square};

/// A fully legal move with the piece it captures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

/// True if the pseudo-legal move `from -> to` keeps `color`'s king safe
///
/// The board is mutated and restored before returning.
fn keeps_king_safe(board: &mut Board, from: Square, to: Square, color: Color) -> bool {
    let undo = board.apply(from, to);
    let safe = !is_king_in_check(board, color);
    board.revert(undo);
    safe
}

/// Check whether `from -> to` is fully legal for the piece on `from`
pub fn is_legal_move(
    board: &Board,
    from: Square,
    to: Square,
    last_move: Option<&ChessMove>,
) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    if !is_valid_move(board, from, to, last_move) {
        return false;
    }
    let mut scratch = *board;
    keeps_king_safe(&mut scratch, from, to, piece.color)
}

/// All fully legal moves for `player`, in board scan order
pub fn legal_moves(board: &Board, player: Color, last_move: Option<&ChessMove>) -> Vec<LegalMove> {
    let mut scratch = *board;
    let mut moves = Vec::new();

    for (from, _) in board.pieces_of(player) {
        for to in Square::all() {
            if !is_valid_move(board, from, to, last_move) {
                continue;
            }
            let undo = scratch.apply(from, to);
            if !is_king_in_check(&scratch, player) {
                moves.push(LegalMove {
                    from,
                    to,
                    captured: undo.captured(),
                });
            }
            scratch.revert(undo);
        }
    }

    moves
}

/// Fully legal destinations for the piece on `from`
pub fn legal_destinations(
    board: &Board,
    from: Square,
    last_move: Option<&ChessMove>,
) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    let mut scratch = *board;
    Square::all()
        .filter(|&to| {
            is_valid_move(board, from, to, last_move)
                && keeps_king_safe(&mut scratch, from, to, piece.color)
        })
        .collect()
}

/// True if `player` has at least one fully legal move
///
/// Stops at the first one found.
pub fn has_any_legal_move(board: &Board, player: Color, last_move: Option<&ChessMove>) -> bool {
    let mut scratch = *board;

    for (from, _) in board.pieces_of(player) {
        for to in Square::all() {
            if is_valid_move(board, from, to, last_move)
                && keeps_king_safe(&mut scratch, from, to, player)
            {
                return true;
            }
        }
    }

    false
}
