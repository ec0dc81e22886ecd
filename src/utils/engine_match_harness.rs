//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on one `GameState`
//! until a side is checkmated, a side has no move, or the ply limit is hit.

use log::{debug, info};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, PlayedMove};
use crate::game_state::chess_types::{Board, Color, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Checkmate { winner: Color },
    /// The side to move had no accepted move without being in checkmate.
    NoLegalMoves { side: Color },
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 200 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub moves: Vec<PlayedMove>,
    pub final_board: Board,
}

impl MatchResult {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Plays `white` against `black` from the standard starting position.
///
/// Each engine moves on the turn matching its [`Engine::color`].
pub fn play_match(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, ChessErrors> {
    let mut game = GameState::new_game();
    let mut moves = Vec::new();

    let outcome = loop {
        if moves.len() as u32 >= config.max_plies {
            break MatchOutcome::MaxPlies;
        }

        let mover = game.current_player;
        let engine: &mut dyn Engine = if white.color() == mover {
            &mut *white
        } else {
            &mut *black
        };

        let Some(played) = game.run_opponent_turn(&mut *engine)? else {
            break MatchOutcome::NoLegalMoves { side: mover };
        };
        debug!(
            "ply {} {}: {:?} {} -> {} ({:?})",
            moves.len() + 1,
            engine.name(),
            played.mv.piece,
            played.mv.from,
            played.mv.to,
            played.tier
        );
        moves.push(played);

        if game.is_checkmate(mover.opposite())? {
            break MatchOutcome::Checkmate { winner: mover };
        }
    };

    info!("match finished after {} plies: {:?}", moves.len(), outcome);

    Ok(MatchResult {
        outcome,
        moves,
        final_board: game.board().clone(),
    })
}
