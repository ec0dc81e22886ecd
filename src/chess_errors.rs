//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by board setup, move
//! execution, check inspection and the engines. Ordinary rejections that are
//! part of normal play (a move that would leave the mover's king in check, an
//! off-board query) are not errors: `make_move` reports them as `Ok(false)` and
//! board queries return `None`.
//!
//! Usage guidelines:
//! - `UndoUnderflow` and `KingNotFound` indicate a desynchronised caller or a
//!   broken board invariant. Callers should stop the game rather than retry.
//! - `EmptyOrigin` and `PieceMismatch` are caller mistakes (the presentation
//!   layer asked to move something that is not there) and leave state untouched.
//! - `InvalidDiagram` is only produced while building a board from text.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Piece, Square};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// `undo` needs two snapshots (one full round) but fewer were recorded.
    ///
    /// Payload: the number of snapshots that were available.
    UndoUnderflow { available: usize },

    /// A check or checkmate query found no king of the given colour.
    ///
    /// Self-check prevention means kings are never captured in normal play, so
    /// this always points at a position that was constructed inconsistently.
    KingNotFound(Color),

    /// Attempted to move from a square that holds no piece.
    EmptyOrigin(Square),

    /// The piece handed to `make_move` is not the one standing on the origin.
    PieceMismatch {
        square: Square,
        expected: Piece,
        found: Piece,
    },

    /// A text board diagram could not be interpreted.
    ///
    /// Payload: a description of the offending row or character.
    InvalidDiagram(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::UndoUnderflow { available } => write!(
                f,
                "cannot undo a full round: {available} snapshot(s) in history, 2 required"
            ),
            ChessErrors::KingNotFound(color) => write!(f, "no {color:?} king on the board"),
            ChessErrors::EmptyOrigin(square) => write!(f, "no piece on origin square {square}"),
            ChessErrors::PieceMismatch {
                square,
                expected,
                found,
            } => write!(
                f,
                "expected {expected:?} on {square} but found {found:?}"
            ),
            ChessErrors::InvalidDiagram(msg) => write!(f, "invalid board diagram: {msg}"),
        }
    }
}

impl Error for ChessErrors {}
