use crate::game_state::chess_rules::KING_SLIDE;
use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::sliding_moves::{diagonal_moves, horizontal_moves, vertical_moves};

/// One step in any of the eight directions. No castling.
#[inline]
pub fn king_moves(board: &Board, color: Color, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(8);
    diagonal_moves(board, color, from, KING_SLIDE, &mut out);
    horizontal_moves(board, color, from, KING_SLIDE, &mut out);
    vertical_moves(board, color, from, KING_SLIDE, &mut out);
    out
}
