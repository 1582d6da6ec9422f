pub mod engine;

pub use engine::{Opponent, RandomOpponent, pick_move};
