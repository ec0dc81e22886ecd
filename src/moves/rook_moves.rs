use crate::game_state::chess_rules::UNBOUNDED_SLIDE;
use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::sliding_moves::{horizontal_moves, vertical_moves};

#[inline]
pub fn rook_moves(board: &Board, color: Color, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    horizontal_moves(board, color, from, UNBOUNDED_SLIDE, &mut out);
    vertical_moves(board, color, from, UNBOUNDED_SLIDE, &mut out);
    out
}
