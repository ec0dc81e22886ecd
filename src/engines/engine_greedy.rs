//! Fixed-priority greedy opponent.
//!
//! Looks one ply ahead by playing candidates on the live game and taking back
//! the ones that do not meet the current tier's condition. Tiers, in order:
//! checkmate the opponent, check the opponent, capture a queen, bishop,
//! knight, rook, pawn, and finally a uniformly random legal move. Candidates
//! that would leave the engine's own king in check are refused by
//! `make_move` and skipped.

use log::{debug, warn};
use rand::rngs::StdRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_random::{engine_rng, play_random_move};
use crate::engines::engine_trait::{Engine, PlayedMove, PriorityTier};
use crate::game_state::chess_types::{ChessMove, Color, GameState};
use crate::move_generation::move_generator::pseudo_legal_moves_for;

/// Side and random source for the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentConfig {
    pub color: Color,
    /// Fixed seed for reproducible fallback moves; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            color: Color::Black,
            seed: None,
        }
    }
}

pub struct GreedyEngine {
    color: Color,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new(config: OpponentConfig) -> Self {
        Self {
            color: config.color,
            rng: engine_rng(config.seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new(OpponentConfig::default())
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn play_turn(&mut self, game: &mut GameState) -> Result<Option<PlayedMove>, ChessErrors> {
        let opponent = self.color.opposite();
        let candidates = pseudo_legal_moves_for(game.board(), self.color);

        if let Some(mv) = keep_first_where(game, &candidates, |g| g.is_checkmate(opponent))? {
            return Ok(Some(selected(mv, PriorityTier::Checkmate)));
        }

        if let Some(mv) = keep_first_where(game, &candidates, |g| g.is_in_check(opponent))? {
            return Ok(Some(selected(mv, PriorityTier::Check)));
        }

        for tier in PriorityTier::CAPTURE_ORDER {
            let Some(target) = tier.capture_target() else {
                continue;
            };
            let captures: Vec<ChessMove> = candidates
                .iter()
                .copied()
                .filter(|mv| {
                    matches!(
                        game.board().piece_at(mv.to),
                        Some(victim) if victim.color == opponent && victim.kind.same_kind(target)
                    )
                })
                .collect();

            if let Some(mv) = keep_first_where(game, &captures, |_| Ok(true))? {
                return Ok(Some(selected(mv, tier)));
            }
        }

        match play_random_move(game, self.color, &mut self.rng)? {
            Some(mv) => Ok(Some(selected(mv, PriorityTier::Random))),
            None => {
                warn!("{:?} has no legal move", self.color);
                Ok(None)
            }
        }
    }
}

/// Plays candidates in order and keeps the first accepted one for which
/// `condition` holds on the resulting position. Everything else is rolled back.
fn keep_first_where<F>(
    game: &mut GameState,
    candidates: &[ChessMove],
    mut condition: F,
) -> Result<Option<ChessMove>, ChessErrors>
where
    F: FnMut(&mut GameState) -> Result<bool, ChessErrors>,
{
    for mv in candidates {
        let player = game.current_player;
        if !game.make_move(mv.piece, mv.from, mv.to)? {
            continue;
        }
        match condition(game) {
            Ok(true) => return Ok(Some(*mv)),
            Ok(false) => game.rollback(player)?,
            Err(err) => {
                game.rollback(player)?;
                return Err(err);
            }
        }
    }
    Ok(None)
}

fn selected(mv: ChessMove, tier: PriorityTier) -> PlayedMove {
    debug!("{:?} tier: {:?} {} -> {}", tier, mv.piece, mv.from, mv.to);
    PlayedMove { mv, tier }
}
