//! Pseudo-legal move generation.
//!
//! Maps each piece kind onto its movement rule and aggregates destinations for
//! a whole side. Nothing here considers self-check: that is decided by
//! `GameState::make_move`, which plays the move and inspects the result.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Destinations for `piece` standing on `from`, given the occupancy of `board`.
pub fn pseudo_legal_moves(board: &Board, piece: Piece, from: Square) -> Vec<Square> {
    match piece.kind {
        PieceKind::King => king_moves(board, piece.color, from),
        PieceKind::Queen => queen_moves(board, piece.color, from),
        PieceKind::Rook => rook_moves(board, piece.color, from),
        PieceKind::Bishop => bishop_moves(board, piece.color, from),
        PieceKind::Knight => knight_moves(board, piece.color, from),
        PieceKind::Pawn { moved } => pawn_moves(board, piece.color, moved, from),
    }
}

impl Piece {
    #[inline]
    pub fn valid_moves(&self, board: &Board, from: Square) -> Vec<Square> {
        pseudo_legal_moves(board, *self, from)
    }
}

/// Every pseudo-legal move of `color`, pieces scanned in row-major order.
pub fn pseudo_legal_moves_for(board: &Board, color: Color) -> Vec<ChessMove> {
    let mut out = Vec::new();
    for from in board.piece_locations(color) {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        out.extend(
            piece
                .valid_moves(board, from)
                .into_iter()
                .map(|to| ChessMove { piece, from, to }),
        );
    }
    out
}

/// Union of all pseudo-legal destinations of `color`.
///
/// Pawn pushes are included alongside captures, matching how check is
/// defined in this engine.
pub fn reachable_squares(board: &Board, color: Color) -> Vec<Square> {
    let mut out: Vec<Square> = pseudo_legal_moves_for(board, color)
        .into_iter()
        .map(|mv| mv.to)
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}
