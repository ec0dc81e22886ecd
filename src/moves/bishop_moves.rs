use crate::game_state::chess_rules::UNBOUNDED_SLIDE;
use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::sliding_moves::diagonal_moves;

#[inline]
pub fn bishop_moves(board: &Board, color: Color, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(13);
    diagonal_moves(board, color, from, UNBOUNDED_SLIDE, &mut out);
    out
}
