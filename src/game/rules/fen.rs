//! FEN encoder
//!
//! Produces Forsyth-Edwards Notation for handing a position to an external
//! engine. Only piece placement and side to move are real: castling rights
//! are always `KQkq`, the en passant target is always `-`, and the clocks
//! are fixed at `0 1`. Consumers that need accurate castling or en passant
//! state can't rely on those fields.

use super::board_state::Board;
use crate::game::types::Color;

/// Encode `board` with `current_player` to move
pub fn board_to_fen(board: &Board, current_player: Color) -> String {
    let mut fen = String::with_capacity(64);

    for (row, squares) in board.rows().iter().enumerate() {
        let mut empty = 0;
        for square in squares {
            match square {
                Some(piece) => {
                    if empty > 0 {
                        fen.push_str(&empty.to_string());
                        empty = 0;
                    }
                    fen.push(piece.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            fen.push_str(&empty.to_string());
        }
        if row < 7 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(current_player.code());
    fen.push_str(" KQkq - 0 1");
    fen
}
