use crate::game_state::chess_types::{Board, Color, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Fixed-offset jumps: a target is valid when on the board and either empty or
/// held by an opposing piece.
pub fn leap(
    board: &Board,
    color: Color,
    origin: Square,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        let Some(target) = origin.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(target) {
            Some(occupant) if occupant.color == color => {}
            _ => out.push(target),
        }
    }
}

#[inline]
pub fn knight_moves(board: &Board, color: Color, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(8);
    leap(board, color, from, &KNIGHT_OFFSETS, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::chess_types::{Board, Color, Piece, Square};

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let moves = knight_moves(&Board::empty(), Color::White, Square::new(4, 3).unwrap());
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn knight_in_corner_only_lands_on_board() {
        for color in [Color::White, Color::Black] {
            let mut moves = knight_moves(&Board::empty(), color, Square::new(0, 0).unwrap());
            moves.sort();
            assert_eq!(
                moves,
                vec![Square::new(1, 2).unwrap(), Square::new(2, 1).unwrap()]
            );
        }
    }

    #[test]
    fn knight_skips_friends_and_takes_enemies() {
        let mut board = Board::empty();
        board.set(Square::new(2, 1).unwrap(), Some(Piece::pawn(Color::White)));
        board.set(Square::new(1, 2).unwrap(), Some(Piece::pawn(Color::Black)));

        let moves = knight_moves(&board, Color::White, Square::new(0, 0).unwrap());

        assert_eq!(moves, vec![Square::new(1, 2).unwrap()]);
    }
}
