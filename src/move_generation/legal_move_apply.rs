//! Move execution with snapshot rollback.
//!
//! Every attempted move first pushes a clone of the board onto the history.
//! The move is then played on the live board and, if it leaves the mover's
//! own king in check, the snapshot is popped straight back. A successful move
//! therefore adds exactly one history entry and a rejected one adds none.

use log::{debug, trace};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;

impl GameState {
    /// Moves `piece` from `from` to `to`, capturing whatever stands on `to`.
    ///
    /// Returns `Ok(false)` and leaves the game untouched when the move would
    /// leave the mover's king in check. On success a pawn reaching the far
    /// rank becomes a queen and the side to move flips. The destination is
    /// not checked against the piece's movement pattern; callers pick it from
    /// [`GameState::valid_moves`].
    pub fn make_move(&mut self, piece: Piece, from: Square, to: Square) -> Result<bool, ChessErrors> {
        let found = self.board.piece_at(from).ok_or(ChessErrors::EmptyOrigin(from))?;
        if found != piece {
            return Err(ChessErrors::PieceMismatch {
                square: from,
                expected: piece,
                found,
            });
        }

        self.history.push(self.board.clone());

        let mut moving = found;
        if let PieceKind::Pawn { moved } = &mut moving.kind {
            *moved = true;
        }
        self.board.take(from);
        self.board.set(to, Some(moving));
        trace!("trial {:?} {} -> {}", piece, from, to);

        let exposes_king = match self.is_in_check(piece.color) {
            Ok(exposed) => exposed,
            Err(err) => {
                self.restore_snapshot()?;
                return Err(err);
            }
        };
        if exposes_king {
            self.restore_snapshot()?;
            debug!("rejected {:?} {} -> {}: own king left in check", piece, from, to);
            return Ok(false);
        }

        if moving.kind.is_pawn() && to.row() == piece.color.promotion_row() {
            self.board.set(to, Some(Piece::queen(piece.color)));
            debug!("promoted {:?} pawn on {}", piece.color, to);
        }

        self.switch_player();
        Ok(true)
    }

    /// Reverts one full round (two half-moves) by popping two snapshots and
    /// restoring the older one. The side to move is left as it is.
    pub fn undo(&mut self) -> Result<(), ChessErrors> {
        let available = self.history.len();
        if available < 2 {
            return Err(ChessErrors::UndoUnderflow { available });
        }

        self.history.pop();
        self.board = self
            .history
            .pop()
            .ok_or(ChessErrors::UndoUnderflow { available })?;
        debug!("undo restored board from {} snapshot(s)", available);
        Ok(())
    }

    /// Reverts the most recent accepted move and hands the turn back to
    /// `player`. Used to take back trial moves during search.
    pub fn rollback(&mut self, player: Color) -> Result<(), ChessErrors> {
        self.restore_snapshot()?;
        self.current_player = player;
        trace!("rolled back to {:?} to move", player);
        Ok(())
    }

    /// Plays `mv` and immediately takes it back, reporting whether it was
    /// accepted. The game is left exactly as it was.
    pub fn trial_move(&mut self, mv: ChessMove) -> Result<bool, ChessErrors> {
        let player = self.current_player;
        if self.make_move(mv.piece, mv.from, mv.to)? {
            self.rollback(player)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn restore_snapshot(&mut self) -> Result<(), ChessErrors> {
        self.board = self
            .history
            .pop()
            .ok_or(ChessErrors::UndoUnderflow { available: 0 })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::*;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn play(game: &mut GameState, from: (i8, i8), to: (i8, i8)) -> bool {
        let from = sq(from.0, from.1);
        let piece = game.board().piece_at(from).unwrap();
        game.make_move(piece, from, sq(to.0, to.1)).unwrap()
    }

    #[test]
    fn accepted_move_relocates_piece_and_switches_player() {
        let mut game = GameState::new_game();
        assert!(play(&mut game, (6, 4), (4, 4)));

        assert_eq!(game.get(6, 4), None);
        assert_eq!(
            game.get(4, 4),
            Some(Piece::new(PieceKind::Pawn { moved: true }, Color::White))
        );
        assert_eq!(game.current_player, Color::Black);
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn move_exposing_own_king_is_rejected_without_trace() {
        let board = Board::from_diagram(
            "
            k...r...
            ........
            ........
            ........
            ........
            ........
            ....R...
            ....K...
            ",
        )
        .unwrap();
        let mut game = GameState::from_board(board.clone(), Color::White);

        assert!(!play(&mut game, (6, 4), (6, 0)));

        assert_eq!(game.board(), &board);
        assert_eq!(game.history_len(), 0);
        assert_eq!(game.current_player, Color::White);
    }

    #[test]
    fn rejected_pawn_move_keeps_pawn_unmoved() {
        let board = Board::from_diagram(
            "
            ....k...
            ........
            ........
            b.......
            ........
            ........
            ...P....
            ....K...
            ",
        )
        .unwrap();
        let mut game = GameState::from_board(board.clone(), Color::White);

        assert!(!play(&mut game, (6, 3), (5, 3)));
        assert_eq!(game.get(6, 3), Some(Piece::pawn(Color::White)));
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn capture_overwrites_destination() {
        let board = Board::from_diagram(
            "
            ....k...
            ........
            ........
            ...q....
            ........
            ........
            ........
            ...RK...
            ",
        )
        .unwrap();
        let mut game = GameState::from_board(board, Color::White);

        assert!(play(&mut game, (7, 3), (3, 3)));
        assert_eq!(game.get(3, 3), Some(Piece::rook(Color::White)));
        assert!(game
            .piece_locations(Color::Black)
            .iter()
            .all(|s| game.board().piece_at(*s) != Some(Piece::queen(Color::Black))));
    }

    #[test]
    fn white_pawn_promotes_to_queen_on_row_zero() {
        let board = Board::from_diagram(
            "
            k.......
            .......P
            ........
            ........
            ........
            ........
            ........
            ....K...
            ",
        )
        .unwrap();
        let mut game = GameState::from_board(board, Color::White);

        assert!(play(&mut game, (1, 7), (0, 7)));

        assert_eq!(game.get(0, 7), Some(Piece::queen(Color::White)));
        assert_eq!(game.get(1, 7), None);
        assert!(game
            .piece_locations(Color::White)
            .iter()
            .all(|s| !game.board().piece_at(*s).unwrap().kind.is_pawn()));
    }

    #[test]
    fn black_pawn_promotes_to_queen_on_row_seven() {
        let board = Board::from_diagram(
            "
            ....k...
            ........
            ........
            ........
            ........
            ........
            p.......
            .......K
            ",
        )
        .unwrap();
        let mut game = GameState::from_board(board, Color::Black);

        assert!(play(&mut game, (6, 0), (7, 0)));
        assert_eq!(game.get(7, 0), Some(Piece::queen(Color::Black)));
    }

    #[test]
    fn undo_reverts_one_full_round() {
        let mut game = GameState::new_game();
        assert!(play(&mut game, (6, 4), (4, 4)));
        assert!(play(&mut game, (1, 4), (3, 4)));

        game.undo().unwrap();

        assert_eq!(game.board(), &Board::standard());
        assert_eq!(game.history_len(), 0);
        assert_eq!(game.current_player, Color::White);
        assert_eq!(
            game.undo(),
            Err(ChessErrors::UndoUnderflow { available: 0 })
        );
    }

    #[test]
    fn undo_leaves_side_to_move_alone() {
        let mut game = GameState::new_game();
        assert!(play(&mut game, (6, 4), (4, 4)));
        let after_first = game.board().clone();
        assert!(play(&mut game, (1, 4), (3, 4)));
        assert!(play(&mut game, (7, 6), (5, 5)));
        assert_eq!(game.current_player, Color::Black);

        game.undo().unwrap();

        assert_eq!(game.board(), &after_first);
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.current_player, Color::Black);
    }

    #[test]
    fn undo_with_single_snapshot_underflows() {
        let mut game = GameState::new_game();
        assert!(play(&mut game, (6, 0), (5, 0)));
        assert_eq!(
            game.undo(),
            Err(ChessErrors::UndoUnderflow { available: 1 })
        );
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn trial_move_leaves_game_untouched() {
        let mut game = GameState::new_game();
        let before = game.board().clone();
        let mv = ChessMove {
            piece: Piece::knight(Color::White),
            from: sq(7, 6),
            to: sq(5, 5),
        };

        assert!(game.trial_move(mv).unwrap());

        assert_eq!(game.board(), &before);
        assert_eq!(game.current_player, Color::White);
        assert_eq!(game.history_len(), 0);
    }

    #[test]
    fn moving_from_empty_square_is_an_error() {
        let mut game = GameState::new_game();
        let result = game.make_move(Piece::queen(Color::White), sq(4, 4), sq(3, 4));
        assert_eq!(result, Err(ChessErrors::EmptyOrigin(sq(4, 4))));
        assert_eq!(game.history_len(), 0);
    }

    #[test]
    fn mismatched_piece_is_an_error() {
        let mut game = GameState::new_game();
        let result = game.make_move(Piece::queen(Color::White), sq(7, 1), sq(5, 2));
        assert!(matches!(result, Err(ChessErrors::PieceMismatch { .. })));
        assert_eq!(game.board(), &Board::standard());
    }

    #[test]
    fn missing_king_is_reported_and_board_restored() {
        let board = Board::from_diagram(
            "
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            R.......
            ",
        )
        .unwrap();
        let mut game = GameState::from_board(board.clone(), Color::White);

        let result = game.make_move(Piece::rook(Color::White), sq(7, 0), sq(6, 0));

        assert_eq!(result, Err(ChessErrors::KingNotFound(Color::White)));
        assert_eq!(game.board(), &board);
        assert_eq!(game.history_len(), 0);
    }
}
