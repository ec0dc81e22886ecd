//! Pawn movement.
//!
//! White advances toward row 0 and Black toward row 7. An unmoved pawn may
//! advance one or two empty squares; a moved pawn one. Diagonal squares are
//! destinations only when they hold an opposing piece. The same bounds-checked
//! rule applies to both colours on both edges. No en passant.

use crate::game_state::chess_types::{Board, Color, Square};

pub fn pawn_moves(board: &Board, color: Color, moved: bool, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(4);
    let forward = color.forward();
    let max_steps = if moved { 1 } else { 2 };

    let mut current = from;
    for _ in 0..max_steps {
        match current.offset(forward, 0) {
            Some(next) if board.piece_at(next).is_none() => {
                out.push(next);
                current = next;
            }
            _ => break,
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(forward, d_col) else {
            continue;
        };
        if matches!(board.piece_at(target), Some(occupant) if occupant.color != color) {
            out.push(target);
        }
    }

    out
}
