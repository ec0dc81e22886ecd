//! Check and checkmate inspection.
//!
//! Check is answered from pseudo-legal destinations alone. Checkmate reuses
//! `make_move` as its legality oracle: candidate escapes are played on the live
//! board and rolled back, so no second copy of the position is ever searched.

use log::trace;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{pseudo_legal_moves_for, reachable_squares};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Result<Square, ChessErrors> {
    board.find_king(color).ok_or(ChessErrors::KingNotFound(color))
}

/// True when `color`'s king stands on a square some opposing piece can reach.
pub fn is_king_in_check(board: &Board, color: Color) -> Result<bool, ChessErrors> {
    let king = king_square(board, color)?;
    Ok(pseudo_legal_moves_for(board, color.opposite())
        .iter()
        .any(|mv| mv.to == king))
}

impl GameState {
    pub fn is_in_check(&self, color: Color) -> Result<bool, ChessErrors> {
        is_king_in_check(&self.board, color)
    }

    /// True when `color` is in check and no move gets it out.
    ///
    /// King steps onto squares the opponent cannot already reach are tried
    /// first, then every move of every defending piece. The first accepted
    /// candidate is rolled back and ends the search.
    pub fn is_checkmate(&mut self, color: Color) -> Result<bool, ChessErrors> {
        if !self.is_in_check(color)? {
            return Ok(false);
        }

        let king_from = king_square(&self.board, color)?;
        let king = self
            .board
            .piece_at(king_from)
            .ok_or(ChessErrors::KingNotFound(color))?;
        let covered = reachable_squares(&self.board, color.opposite());

        for to in king.valid_moves(&self.board, king_from) {
            if covered.binary_search(&to).is_ok() {
                continue;
            }
            let escape = ChessMove {
                piece: king,
                from: king_from,
                to,
            };
            if self.trial_move(escape)? {
                trace!("{:?} king escapes to {}", color, to);
                return Ok(false);
            }
        }

        for defence in pseudo_legal_moves_for(&self.board, color) {
            if self.trial_move(defence)? {
                trace!(
                    "{:?} defends with {:?} {} -> {}",
                    color,
                    defence.piece,
                    defence.from,
                    defence.to
                );
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Every pseudo-legal move of `color` that `make_move` would accept.
    pub fn legal_moves(&mut self, color: Color) -> Result<Vec<ChessMove>, ChessErrors> {
        let mut out = Vec::new();
        for candidate in pseudo_legal_moves_for(&self.board, color) {
            if self.trial_move(candidate)? {
                out.push(candidate);
            }
        }
        Ok(out)
    }
}
