//! Value types shared by the board, move generation and engines.
//!
//! Pieces carry no position: where a piece stands is implied solely by the
//! board cell holding it. Row 0 is Black's back rank and row 7 is White's, so
//! White pawns advance toward smaller rows.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

use crate::game_state::chess_rules::BOARD_SIZE;

/// Side owning a piece, and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step a pawn of this colour takes when advancing.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which a pawn of this colour is promoted.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        self.opposite().home_row()
    }
}

/// Closed set of piece kinds. Only pawns carry mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    /// `moved` flips to true on the pawn's first move and never flips back.
    Pawn { moved: bool },
}

impl PieceKind {
    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self, PieceKind::Pawn { .. })
    }

    /// Compares kinds while ignoring the pawn `moved` flag.
    #[inline]
    pub fn same_kind(self, other: PieceKind) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub const fn king(color: Color) -> Self {
        Self::new(PieceKind::King, color)
    }

    pub const fn queen(color: Color) -> Self {
        Self::new(PieceKind::Queen, color)
    }

    pub const fn rook(color: Color) -> Self {
        Self::new(PieceKind::Rook, color)
    }

    pub const fn bishop(color: Color) -> Self {
        Self::new(PieceKind::Bishop, color)
    }

    pub const fn knight(color: Color) -> Self {
        Self::new(PieceKind::Knight, color)
    }

    /// An unmoved pawn.
    pub const fn pawn(color: Color) -> Self {
        Self::new(PieceKind::Pawn { moved: false }, color)
    }

    #[inline]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }
}

/// An on-board `(row, col)` coordinate.
///
/// Squares can only be built through [`Square::new`] or [`Square::offset`], so
/// every `Square` value is guaranteed to lie inside the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Option<Self> {
        if row < 0 || row >= BOARD_SIZE || col < 0 || col >= BOARD_SIZE {
            None
        } else {
            Some(Self { row, col })
        }
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::new(self.row + d_row, self.col + d_col)
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Every square in row-major order, starting at Black's back rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A concrete move of `piece` from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}
