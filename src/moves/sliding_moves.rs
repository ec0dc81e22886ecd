//! Ray-cast movement shared by kings, queens, rooks and bishops.
//!
//! A ray walks away from its origin one square at a time. Empty squares are
//! destinations and the walk continues; an opposing piece is a destination
//! and ends the walk; a friendly piece ends the walk without being added.
//! Leaving the board ends the walk silently.

use crate::game_state::chess_types::{Board, Color, Square};

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const HORIZONTAL_DIRECTIONS: [(i8, i8); 2] = [(0, -1), (0, 1)];
pub const VERTICAL_DIRECTIONS: [(i8, i8); 2] = [(-1, 0), (1, 0)];

/// Walks from `origin` by `(row_step, col_step)` for at most `max_distance`
/// squares, pushing every reachable destination for a piece of `color`.
pub fn slide(
    board: &Board,
    color: Color,
    origin: Square,
    row_step: i8,
    col_step: i8,
    max_distance: u8,
    out: &mut Vec<Square>,
) {
    let mut current = origin;

    for _ in 0..max_distance {
        let Some(next) = current.offset(row_step, col_step) else {
            break;
        };

        match board.piece_at(next) {
            None => out.push(next),
            Some(occupant) => {
                if occupant.color != color {
                    out.push(next);
                }
                break;
            }
        }

        current = next;
    }
}

pub fn diagonal_moves(
    board: &Board,
    color: Color,
    origin: Square,
    max_distance: u8,
    out: &mut Vec<Square>,
) {
    for (row_step, col_step) in DIAGONAL_DIRECTIONS {
        slide(board, color, origin, row_step, col_step, max_distance, out);
    }
}

pub fn horizontal_moves(
    board: &Board,
    color: Color,
    origin: Square,
    max_distance: u8,
    out: &mut Vec<Square>,
) {
    for (row_step, col_step) in HORIZONTAL_DIRECTIONS {
        slide(board, color, origin, row_step, col_step, max_distance, out);
    }
}

pub fn vertical_moves(
    board: &Board,
    color: Color,
    origin: Square,
    max_distance: u8,
    out: &mut Vec<Square>,
) {
    for (row_step, col_step) in VERTICAL_DIRECTIONS {
        slide(board, color, origin, row_step, col_step, max_distance, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn slide_stops_on_capture_and_before_friend() {
        let mut board = Board::empty();
        board.set(sq(3, 6), Some(Piece::pawn(Color::Black)));
        board.set(sq(3, 0), Some(Piece::pawn(Color::White)));

        let mut out = Vec::new();
        horizontal_moves(&board, Color::White, sq(3, 3), 8, &mut out);
        out.sort();

        assert_eq!(out, vec![sq(3, 1), sq(3, 2), sq(3, 4), sq(3, 5), sq(3, 6)]);
    }

    #[test]
    fn slide_respects_max_distance() {
        let board = Board::empty();
        let mut out = Vec::new();
        slide(&board, Color::Black, sq(0, 0), 1, 1, 1, &mut out);
        assert_eq!(out, vec![sq(1, 1)]);
    }

    #[test]
    fn slide_off_board_yields_nothing() {
        let board = Board::empty();
        let mut out = Vec::new();
        slide(&board, Color::White, sq(0, 0), -1, 0, 8, &mut out);
        assert!(out.is_empty());
    }
}
