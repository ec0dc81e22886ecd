//! 8x8 mailbox board.
//!
//! Each cell holds at most one piece. Cloning a board copies every piece, so a
//! snapshot taken before a trial move is unaffected by later in-place edits
//! (including a pawn's `moved` flag being set).

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, BOARD_SIZE};
use crate::game_state::chess_types::*;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting position: Black on rows 0-1, White on rows 6-7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.cells[color.home_row() as usize][col] = Some(Piece::new(*kind, color));
                board.cells[color.pawn_row() as usize][col] = Some(Piece::pawn(color));
            }
        }
        board
    }

    /// Bounds-safe lookup. Off-board coordinates read as an empty cell.
    pub fn get(&self, row: i32, col: i32) -> Option<Piece> {
        let row = i8::try_from(row).ok()?;
        let col = i8::try_from(col).ok()?;
        Square::new(row, col).and_then(|square| self.piece_at(square))
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Writes `piece` into `square`, returning whatever was there before.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.cells[square.row() as usize][square.col() as usize],
            piece,
        )
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.set(square, None)
    }

    /// All squares occupied by `color`, in row-major order.
    pub fn piece_locations(&self, color: Color) -> Vec<Square> {
        Square::all()
            .filter(|square| matches!(self.piece_at(*square), Some(p) if p.color == color))
            .collect()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|square| {
            matches!(self.piece_at(*square), Some(p) if p.is_king() && p.color == color)
        })
    }

    /// Builds a board from eight rows of eight characters, row 0 first.
    ///
    /// Upper case is White and lower case Black (`K Q R B N P`), `.` is an
    /// empty cell. Blank lines and surrounding whitespace are ignored. A pawn
    /// standing on its own starting row is unmoved; anywhere else it is marked
    /// as having moved.
    pub fn from_diagram(diagram: &str) -> Result<Self, ChessErrors> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE as usize {
            return Err(ChessErrors::InvalidDiagram(format!(
                "expected {BOARD_SIZE} rows but found {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != BOARD_SIZE as usize {
                return Err(ChessErrors::InvalidDiagram(format!(
                    "row {row} has {} cells: '{line}'",
                    chars.len()
                )));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = piece_from_char(ch, row as i8).ok_or_else(|| {
                    ChessErrors::InvalidDiagram(format!("unexpected '{ch}' in row {row}"))
                })?;
                board.cells[row][col] = Some(piece);
            }
        }

        Ok(board)
    }
}

fn piece_from_char(ch: char, row: i8) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'k' => PieceKind::King,
        'q' => PieceKind::Queen,
        'r' => PieceKind::Rook,
        'b' => PieceKind::Bishop,
        'n' => PieceKind::Knight,
        'p' => PieceKind::Pawn {
            moved: row != color.pawn_row(),
        },
        _ => return None,
    };
    Some(Piece::new(kind, color))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
