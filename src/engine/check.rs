//! Check and checkmate detection.
//!
//! Checkmate is found by brute force: every pseudo-legal move of the side in
//! check is tried on a scratch copy of the board, and the position is mate
//! only if none of them leaves the king out of check.

use crate::engine::attacks::is_square_attacked;
use crate::engine::board::Board;
use crate::engine::movegen::attack_targets;
use crate::engine::types::Color;

/// Is `color`'s king attacked? A colour without a king is never in check.
pub fn is_in_check(color: Color, board: &Board) -> bool {
    board
        .find_king(color)
        .is_some_and(|king| is_square_attacked(king, !color, board))
}

/// Is `color` checkmated?
///
/// Returns false straight away when `color` is not in check. Castling is
/// never tried: it is unavailable while in check.
pub fn is_checkmate(color: Color, board: &Board) -> bool {
    if !is_in_check(color, board) {
        return false;
    }
    !has_escape(color, board)
}

/// Does some pseudo-legal move of `color` end with its king not in check?
fn has_escape(color: Color, board: &Board) -> bool {
    board.pieces_of(color).any(|piece| {
        attack_targets(&piece, board).into_iter().any(|to| {
            let mut scratch = board.clone();
            scratch.move_piece(piece.position, to);
            !is_in_check(color, &scratch)
        })
    })
}
