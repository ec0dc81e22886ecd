//! Live game state shared by move execution, check inspection and engines.
//!
//! `GameState` owns the single board that every operation mutates in place,
//! the side to move, and the snapshot history used both for trial rollbacks
//! and for `undo`. Move execution lives in `move_generation::legal_move_apply`
//! and check inspection in `move_generation::legal_move_checks`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoHistory;
use crate::move_generation::move_generator::pseudo_legal_moves;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub current_player: Color,
    pub(crate) history: UndoHistory,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move, empty history.
    pub fn new_game() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Starts from an arbitrary position with an empty history.
    pub fn from_board(board: Board, current_player: Color) -> Self {
        Self {
            board,
            current_player,
            history: UndoHistory::new(),
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::standard();
        self.current_player = Color::White;
        self.history.clear();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Bounds-safe read of a single cell.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Option<Piece> {
        self.board.get(row, col)
    }

    pub fn piece_locations(&self, color: Color) -> Vec<Square> {
        self.board.piece_locations(color)
    }

    /// Pseudo-legal destinations for `piece` standing on `from`.
    ///
    /// Self-check is not filtered out here; `make_move` is the final arbiter.
    pub fn valid_moves(&self, piece: Piece, from: Square) -> Vec<Square> {
        pseudo_legal_moves(&self.board, piece, from)
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opposite();
    }
}
