//! Pseudo-legal move generation.
//!
//! Destinations are produced per piece and never filtered for leaving the
//! mover's own king in check; that filtering only happens inside the
//! checkmate search (see `engine::check`).
//!
//! Two entry points:
//!   - [`moves_for`] is what a player may request, castling included.
//!   - [`attack_targets`] limits the king to plain adjacency and is what the
//!     attack oracle and the checkmate search consume. Keeping castling out
//!     of it is what stops castling legality and attack detection from
//!     recursing into each other.

use crate::engine::attacks::is_square_attacked;
use crate::engine::board::Board;
use crate::engine::types::{CastlingRights, Color, Piece, PieceKind, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =========================================================================
// Public API
// =========================================================================

/// All pseudo-legal destinations for `piece`, including castling targets
/// for a king whose colour still has castling rights.
pub fn moves_for(piece: &Piece, board: &Board, castling: CastlingRights) -> Vec<Square> {
    let mut moves = attack_targets(piece, board);
    if piece.kind == PieceKind::King {
        generate_castling_moves(piece, board, castling, &mut moves);
    }
    moves
}

/// Pseudo-legal destinations without castling.
pub fn attack_targets(piece: &Piece, board: &Board) -> Vec<Square> {
    let mut moves = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(piece, board, &mut moves),
        PieceKind::Knight => generate_step_moves(piece, board, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop => generate_slider_moves(piece, board, &BISHOP_DIRS, &mut moves),
        PieceKind::Rook => generate_slider_moves(piece, board, &ROOK_DIRS, &mut moves),
        PieceKind::Queen => {
            generate_slider_moves(piece, board, &BISHOP_DIRS, &mut moves);
            generate_slider_moves(piece, board, &ROOK_DIRS, &mut moves);
        }
        PieceKind::King => generate_step_moves(piece, board, &KING_OFFSETS, &mut moves),
    }
    moves
}

/// Destinations for whatever stands on `from`; empty for an empty square.
pub fn moves_from(board: &Board, from: Square, castling: CastlingRights) -> Vec<Square> {
    board
        .piece_at(from)
        .map(|piece| moves_for(&piece, board, castling))
        .unwrap_or_default()
}

// =========================================================================
// Pawn moves
// =========================================================================

fn generate_pawn_moves(piece: &Piece, board: &Board, moves: &mut Vec<Square>) {
    let us = piece.color;
    let from = piece.position;
    let dir = us.forward();

    // --- Single push, then double push from the starting rank ---
    if let Some(one) = from.offset(dir, 0)
        && board.is_empty(one)
    {
        moves.push(one);
        if from.row() == us.pawn_rank()
            && let Some(two) = one.offset(dir, 0)
            && board.is_empty(two)
        {
            moves.push(two);
        }
    }

    // --- Diagonal captures, enemy-occupied only ---
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && board.color_at(to) == Some(!us)
        {
            moves.push(to);
        }
    }
}

// =========================================================================
// Knight & king (fixed offsets)
// =========================================================================

fn generate_step_moves(
    piece: &Piece,
    board: &Board,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = piece.position.offset(dr, dc)
            && board.color_at(to) != Some(piece.color)
        {
            moves.push(to);
        }
    }
}

// =========================================================================
// Slider moves (bishop, rook, queen)
// =========================================================================

fn generate_slider_moves(
    piece: &Piece,
    board: &Board,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in dirs {
        let mut cur = piece.position;
        while let Some(to) = cur.offset(dr, dc) {
            match board.color_at(to) {
                None => moves.push(to),
                Some(c) if c == piece.color => break,
                Some(_) => {
                    // Capture, then the ray is blocked.
                    moves.push(to);
                    break;
                }
            }
            cur = to;
        }
    }
}

// =========================================================================
// Castling
// =========================================================================

fn generate_castling_moves(
    king: &Piece,
    board: &Board,
    castling: CastlingRights,
    moves: &mut Vec<Square>,
) {
    let us = king.color;
    let them = !us;
    if !castling.can_castle(us) || king.position != us.king_home() {
        return;
    }

    // Can't castle while in check.
    if is_square_attacked(king.position, them, board) {
        return;
    }

    let rank = us.back_rank();

    // Kingside: f and g files empty and unattacked, own rook in the h corner.
    if path_is_safe(board, rank, 5..=6, them) && has_own_rook(board, rank, 7, us)
        && let Some(to) = king.position.offset(0, 2)
    {
        moves.push(to);
    }

    // Queenside: b, c and d files empty and unattacked, own rook in the a corner.
    if path_is_safe(board, rank, 1..=3, them) && has_own_rook(board, rank, 0, us)
        && let Some(to) = king.position.offset(0, -2)
    {
        moves.push(to);
    }
}

fn path_is_safe(
    board: &Board,
    rank: u8,
    cols: std::ops::RangeInclusive<u8>,
    them: Color,
) -> bool {
    cols.filter_map(|col| Square::new(rank as i32, col as i32))
        .all(|sq| board.is_empty(sq) && !is_square_attacked(sq, them, board))
}

fn has_own_rook(board: &Board, rank: u8, col: u8, us: Color) -> bool {
    Square::new(rank as i32, col as i32)
        .and_then(|sq| board.piece_at(sq))
        .is_some_and(|p| p.kind == PieceKind::Rook && p.color == us)
}

/// For a `color` king shifting two columns from its home square to
/// `king_to`, the corner rook's (from, to) squares. `None` for any other
/// king move.
pub fn castling_rook_squares(
    color: Color,
    king_from: Square,
    king_to: Square,
) -> Option<(Square, Square)> {
    if king_from != color.king_home() || king_from.row() != king_to.row() {
        return None;
    }
    let row = king_from.row() as i32;
    match king_to.col() as i32 - king_from.col() as i32 {
        2 => Some((Square::new(row, 7)?, king_to.offset(0, -1)?)),
        -2 => Some((Square::new(row, 0)?, king_to.offset(0, 1)?)),
        _ => None,
    }
}

// =========================================================================
// Tests
// =========================================================================
