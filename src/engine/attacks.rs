//! Attack oracle.
//!
//! A square counts as attacked by a colour when any of that colour's pieces
//! lists it among its [`attack_targets`]. The generator's own rules apply,
//! so pawns "attack" the square they could push to and only attack
//! diagonals that hold an enemy piece.

use crate::engine::board::Board;
use crate::engine::movegen::attack_targets;
use crate::engine::types::{Color, Square};

/// Is `sq` attacked by any piece of colour `by`?
pub fn is_square_attacked(sq: Square, by: Color, board: &Board) -> bool {
    board
        .pieces_of(by)
        .any(|piece| attack_targets(&piece, board).contains(&sq))
}
