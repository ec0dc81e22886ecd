//! Engine abstraction shared by the opponent heuristic, the random mover and
//! the self-play harness.
//!
//! Engines act directly on the live `GameState` through `make_move`, so a move
//! reported back has already been applied.

use log::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{ChessMove, Color, GameState, PieceKind};

/// Priority tiers of the opponent heuristic, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityTier {
    Checkmate,
    Check,
    CaptureQueen,
    CaptureBishop,
    CaptureKnight,
    CaptureRook,
    CapturePawn,
    Random,
}

impl PriorityTier {
    pub const CAPTURE_ORDER: [PriorityTier; 5] = [
        PriorityTier::CaptureQueen,
        PriorityTier::CaptureBishop,
        PriorityTier::CaptureKnight,
        PriorityTier::CaptureRook,
        PriorityTier::CapturePawn,
    ];

    /// The kind of piece a capture tier goes after.
    pub const fn capture_target(self) -> Option<PieceKind> {
        match self {
            PriorityTier::CaptureQueen => Some(PieceKind::Queen),
            PriorityTier::CaptureBishop => Some(PieceKind::Bishop),
            PriorityTier::CaptureKnight => Some(PieceKind::Knight),
            PriorityTier::CaptureRook => Some(PieceKind::Rook),
            PriorityTier::CapturePawn => Some(PieceKind::Pawn { moved: false }),
            _ => None,
        }
    }
}

/// A move an engine has applied, with the tier that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: ChessMove,
    pub tier: PriorityTier,
}

pub trait Engine {
    fn name(&self) -> &str;

    /// The side this engine moves for.
    fn color(&self) -> Color;

    /// Chooses and applies one move for [`Engine::color`]. `Ok(None)` means
    /// the side has no move that `make_move` accepts.
    fn play_turn(&mut self, game: &mut GameState) -> Result<Option<PlayedMove>, ChessErrors>;
}

impl GameState {
    /// Lets `engine` reply for its side. Performs no move when none exists
    /// or when it is not the engine's turn.
    pub fn run_opponent_turn<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<Option<PlayedMove>, ChessErrors> {
        if engine.color() != self.current_player {
            debug!(
                "{} plays {:?} but {:?} is to move",
                engine.name(),
                engine.color(),
                self.current_player
            );
            return Ok(None);
        }
        engine.play_turn(self)
    }
}
