//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece can move.
//! Pure functions with no side effects - easy to test.
//!
//! Everything here is *pseudo-legal*: a move that fits the piece's pattern
//! and isn't blocked. Whether it exposes the mover's own king is decided one
//! layer up in [`super::legal`].

use super::board_state::Board;
use crate::game::types::{ChessMove, Color, PieceKind, Square};

/// Check if a move is pseudo-legal for the piece standing on `from`
///
/// `last_move` is only consulted for en passant.
pub fn is_valid_move(
    board: &Board,
    from: Square,
    to: Square,
    last_move: Option<&ChessMove>,
) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };

    // Can't move to the same square
    if from == to {
        return false;
    }

    // Can't capture your own pieces
    if board.get_piece_color(to) == Some(piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(from, to, piece.color, board, last_move),
        PieceKind::Knight => is_valid_knight_move(from, to),
        PieceKind::Bishop => is_valid_bishop_move(from, to, board),
        PieceKind::Rook => is_valid_rook_move(from, to, board),
        PieceKind::Queen => is_valid_queen_move(from, to, board),
        PieceKind::King => is_valid_king_move(from, to),
    }
}

/// Get all pseudo-legal destinations for the piece on `from`
pub fn get_possible_moves(
    board: &Board,
    from: Square,
    last_move: Option<&ChessMove>,
) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_valid_move(board, from, to, last_move))
        .collect()
}

fn is_valid_pawn_move(
    from: Square,
    to: Square,
    color: Color,
    board: &Board,
    last_move: Option<&ChessMove>,
) -> bool {
    let direction = color.pawn_direction();
    let (dr, dc) = from.delta_to(to);

    // Forward moves
    if dc == 0 {
        if dr == direction {
            return board.is_empty(to);
        }
        if dr == 2 * direction && from.row == color.pawn_home_row() {
            let intermediate = Square::new((from.row as i8 + direction) as u8, from.col);
            return board.is_empty(intermediate) && board.is_empty(to);
        }
        return false;
    }

    if dc.abs() != 1 || dr != direction {
        return false;
    }

    // Capture diagonally
    if !board.is_empty(to) {
        return true;
    }

    is_en_passant(from, to, color, board, last_move)
}

/// Diagonal step onto an empty square, allowed right after the enemy pawn
/// beside `from` advanced two squares
fn is_en_passant(
    from: Square,
    to: Square,
    color: Color,
    board: &Board,
    last_move: Option<&ChessMove>,
) -> bool {
    let Some(last) = last_move else {
        return false;
    };

    if !last.is_double_pawn_push() || last.piece.color == color {
        return false;
    }

    if last.to.row != from.row || last.to.col != to.col {
        return false;
    }

    board.get(last.to) == Some(last.piece)
}

fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta_to(to);
    let (dr, dc) = (dr.abs(), dc.abs());
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

fn is_valid_bishop_move(from: Square, to: Square, board: &Board) -> bool {
    let (dr, dc) = from.delta_to(to);

    // Must move diagonally
    if dr.abs() != dc.abs() {
        return false;
    }

    is_path_clear(from, to, board)
}

fn is_valid_rook_move(from: Square, to: Square, board: &Board) -> bool {
    // Must move horizontally or vertically
    if from.row != to.row && from.col != to.col {
        return false;
    }

    is_path_clear(from, to, board)
}

fn is_valid_queen_move(from: Square, to: Square, board: &Board) -> bool {
    // Queen moves like rook or bishop
    is_valid_rook_move(from, to, board) || is_valid_bishop_move(from, to, board)
}

fn is_valid_king_move(from: Square, to: Square) -> bool {
    // One square in any direction, no castling
    from.chebyshev_distance(to) <= 1
}

/// Walk unit steps from `from` toward `to`, both endpoints excluded
///
/// Callers guarantee `from` and `to` share a row, column or diagonal.
pub fn is_path_clear(from: Square, to: Square, board: &Board) -> bool {
    let (dr, dc) = from.delta_to(to);
    let (step_r, step_c) = (dr.signum(), dc.signum());

    let mut row = from.row as i8 + step_r;
    let mut col = from.col as i8 + step_c;

    while (row, col) != (to.row as i8, to.col as i8) {
        if !board.is_empty(Square::new(row as u8, col as u8)) {
            return false;
        }
        row += step_r;
        col += step_c;
    }

    true
}
