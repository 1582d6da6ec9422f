pub mod attacks;
pub mod board;
pub mod check;
pub mod game;
pub mod movegen;
pub mod types;

pub use board::Board;
pub use check::{is_checkmate, is_in_check};
pub use game::{Game, MoveOutcome};
pub use movegen::{attack_targets, moves_for, moves_from};
pub use types::*;
