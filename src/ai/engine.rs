//! Automated opponent: trait definition and `RandomOpponent`.
//!
//! The `Opponent` trait is the interface a driver uses to ask the computer
//! side for a move. The only implementation plays a uniformly random
//! pseudo-legal move, with no look-ahead and no check avoidance.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::engine::board::Board;
use crate::engine::game::Game;
use crate::engine::movegen::moves_for;
use crate::engine::types::{CastlingRights, Color, Move};

// =========================================================================
// Opponent trait
// =========================================================================

/// The automated-opponent interface.
pub trait Opponent: Send + Sync {
    /// Pick a move for the side to move, or `None` if it has no moves.
    fn choose_move(&self, game: &Game) -> Option<Move>;

    /// Human-readable name for this opponent.
    fn name(&self) -> &str;
}

// =========================================================================
// Random move picker
// =========================================================================

/// Every pseudo-legal move of `color`, flattened, then one picked uniformly.
///
/// `None` means the side has no moves at all; whether that is mate or
/// stalemate is for the caller to decide.
pub fn pick_move<R: Rng + ?Sized>(
    color: Color,
    board: &Board,
    castling: CastlingRights,
    rng: &mut R,
) -> Option<Move> {
    let candidates: Vec<Move> = board
        .pieces_of(color)
        .flat_map(|piece| {
            moves_for(&piece, board, castling)
                .into_iter()
                .map(move |to| Move::new(piece.position, to))
        })
        .collect();
    candidates.choose(rng).copied()
}

// =========================================================================
// RandomOpponent
// =========================================================================

/// Picks a random pseudo-legal move.
pub struct RandomOpponent {
    /// Seeded generator for reproducible games; thread RNG when absent.
    rng: Option<Mutex<StdRng>>,
}

impl RandomOpponent {
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Deterministic opponent: the same seed replays the same choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn choose_move(&self, game: &Game) -> Option<Move> {
        let color = game.side_to_move();
        match &self.rng {
            Some(rng) => {
                // A poisoned lock still holds a usable generator.
                let mut rng = rng.lock().unwrap_or_else(|e| e.into_inner());
                pick_move(color, game.board(), game.castling(), &mut *rng)
            }
            None => pick_move(
                color,
                game.board(),
                game.castling(),
                &mut rand::thread_rng(),
            ),
        }
    }

    fn name(&self) -> &str {
        "RandomOpponent"
    }
}

// =========================================================================
// Tests
// =========================================================================
