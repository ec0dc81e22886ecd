//! Random-move engine.
//!
//! Picks uniformly among the moves `make_move` accepts. Used as the fallback
//! tier of the greedy engine and as a stand-in opponent in self-play.

use log::{trace, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, PlayedMove, PriorityTier};
use crate::game_state::chess_types::{ChessMove, Color, GameState};
use crate::move_generation::move_generator::pseudo_legal_moves_for;

/// Seeded generator when `seed` is given, otherwise seeded from the OS.
pub fn engine_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Shuffles every pseudo-legal move of `color` and applies the first one that
/// `make_move` accepts, which makes the choice uniform over legal moves.
pub fn play_random_move(
    game: &mut GameState,
    color: Color,
    rng: &mut StdRng,
) -> Result<Option<ChessMove>, ChessErrors> {
    let mut candidates = pseudo_legal_moves_for(game.board(), color);
    candidates.shuffle(rng);

    for mv in candidates {
        if game.make_move(mv.piece, mv.from, mv.to)? {
            trace!("random pick {:?} {} -> {}", mv.piece, mv.from, mv.to);
            return Ok(Some(mv));
        }
    }

    Ok(None)
}

pub struct RandomEngine {
    color: Color,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(color: Color, seed: Option<u64>) -> Self {
        Self {
            color,
            rng: engine_rng(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn play_turn(&mut self, game: &mut GameState) -> Result<Option<PlayedMove>, ChessErrors> {
        let played = play_random_move(game, self.color, &mut self.rng)?;
        if played.is_none() {
            warn!("{:?} has no legal move", self.color);
        }
        Ok(played.map(|mv| PlayedMove {
            mv,
            tier: PriorityTier::Random,
        }))
    }
}
