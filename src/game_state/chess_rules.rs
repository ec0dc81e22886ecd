//! Canonical chess-rule constants.
//!
//! Board dimensions, the slide distance used for "until blocked" rays, and the
//! back-rank layout used to set up the standard starting position.

use crate::game_state::chess_types::PieceKind;

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

/// Slide distance that covers the whole board, i.e. "until blocked".
pub const UNBOUNDED_SLIDE: u8 = 8;

/// Slide distance for a king step.
pub const KING_SLIDE: u8 = 1;

/// Back-rank pieces from column 0 to column 7, identical for both colours.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
