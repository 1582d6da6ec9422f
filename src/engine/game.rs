//! Stateful game controller wrapping `Board`.
//!
//! `Game` owns the board, side to move, castling flags and status. Moves are
//! validated against the pseudo-legal generator only: a move that leaves the
//! mover's own king attacked is accepted, and legality is enforced solely
//! when deciding whether the opponent is checkmated. It is the primary type
//! callers interact with; one `Game` value per game, owned by the caller.

use tracing::{debug, info};

use crate::engine::board::Board;
use crate::engine::check::{is_checkmate, is_in_check};
use crate::engine::movegen::{castling_rook_squares, moves_for, moves_from};
use crate::engine::types::{
    CastlingRights, ChessError, Color, GameStatus, Move, Piece, PieceKind, Square,
};

// =========================================================================
// MoveOutcome
// =========================================================================

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move that was played.
    pub mv: Move,
    /// The piece that moved, at its new square.
    pub piece: Piece,
    /// Piece removed from the destination, if any.
    pub captured: Option<Piece>,
    /// Whether the move was a castling move (rook relocated too).
    pub castled: bool,
    /// Side to move after the move.
    pub side_to_move: Color,
    /// Status of the new side to move.
    pub status: GameStatus,
}

// =========================================================================
// Game
// =========================================================================

/// A chess game: board, turn, castling flags and status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    status: GameStatus,
}

impl Game {
    // -----------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------

    /// Create a new game from the standard starting position.
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
            side_to_move: Color::White,
            castling: CastlingRights::NONE_MOVED,
            status: GameStatus::Normal,
        }
    }

    /// Create a game from an arbitrary position. Neither king is considered
    /// to have moved; the status is computed for `side_to_move`.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self::from_parts(board, side_to_move, CastlingRights::NONE_MOVED)
    }

    /// Create a game from a position with explicit castling flags.
    pub fn from_parts(board: Board, side_to_move: Color, castling: CastlingRights) -> Self {
        let mut game = Self {
            board,
            side_to_move,
            castling,
            status: GameStatus::Normal,
        };
        game.status = game.compute_status();
        game
    }

    /// Create a game from 8 text rows (see [`Board::from_text`]).
    pub fn from_text<S: AsRef<str>>(rows: &[S], side_to_move: Color) -> Result<Self, ChessError> {
        Ok(Self::from_board(Board::from_text(rows)?, side_to_move))
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// King-moved flags.
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// Whether the game is over.
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Current board as text rows.
    pub fn to_text(&self) -> [String; 8] {
        self.board.to_text()
    }

    /// Pseudo-legal destinations for the piece on `from`, castling included.
    /// An empty square has no moves. Works for either colour.
    pub fn moves_from(&self, from: Square) -> Vec<Square> {
        moves_from(&self.board, from, self.castling)
    }

    /// Every pseudo-legal move of `color` in the current position.
    pub fn moves_for_color(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces_of(color)
            .flat_map(|piece| {
                moves_for(&piece, &self.board, self.castling)
                    .into_iter()
                    .map(move |to| Move::new(piece.position, to))
            })
            .collect()
    }

    // -----------------------------------------------------------------
    // Make move
    // -----------------------------------------------------------------

    /// Play a move for the side to move.
    ///
    /// Rejected moves return an error and leave the game untouched.
    pub fn make_move(&mut self, mv: Move) -> Result<MoveOutcome, ChessError> {
        match self.validate(mv) {
            Ok(piece) => Ok(self.apply(mv, piece)),
            Err(err) => {
                debug!(%mv, %err, "move rejected");
                Err(err)
            }
        }
    }

    fn validate(&self, mv: Move) -> Result<Piece, ChessError> {
        if self.status.is_game_over() {
            return Err(ChessError::GameOver);
        }

        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(ChessError::NoPieceAtSquare(mv.from))?;

        if piece.color != self.side_to_move {
            return Err(ChessError::WrongSideToMove {
                expected: self.side_to_move,
                actual: piece.color,
            });
        }

        if !moves_for(&piece, &self.board, self.castling).contains(&mv.to) {
            return Err(ChessError::IllegalDestination {
                piece: piece.kind,
                from: mv.from,
                to: mv.to,
            });
        }

        Ok(piece)
    }

    fn apply(&mut self, mv: Move, moving: Piece) -> MoveOutcome {
        let us = self.side_to_move;

        let captured = self.board.move_piece(mv.from, mv.to);
        let piece = Piece {
            position: mv.to,
            ..moving
        };
        let mut castled = false;

        if piece.kind == PieceKind::King {
            // ---- Castling: move the rook ----
            if let Some((rook_from, rook_to)) = castling_rook_squares(us, mv.from, mv.to) {
                self.board.move_piece(rook_from, rook_to);
                castled = true;
            }
            self.castling.mark_king_moved(us);
        }

        self.side_to_move = !us;
        self.status = self.compute_status();

        debug!(
            %mv,
            piece = %piece.kind,
            color = %us,
            captured = ?captured.map(|p| p.kind),
            castled,
            "move applied"
        );
        match self.status {
            GameStatus::Check => info!(side = %self.side_to_move, "check"),
            GameStatus::GameOver => info!(winner = %us, "game over"),
            GameStatus::Normal => {}
        }

        MoveOutcome {
            mv,
            piece,
            captured,
            castled,
            side_to_move: self.side_to_move,
            status: self.status,
        }
    }

    // -----------------------------------------------------------------
    // Status detection
    // -----------------------------------------------------------------

    /// Status of the side to move, from scratch.
    ///
    /// A side whose king has been captured (possible under pseudo-legal
    /// execution) has lost.
    fn compute_status(&self) -> GameStatus {
        let color = self.side_to_move;
        if self.board.find_king(color).is_none() {
            return GameStatus::GameOver;
        }
        if !is_in_check(color, &self.board) {
            GameStatus::Normal
        } else if is_checkmate(color, &self.board) {
            GameStatus::GameOver
        } else {
            GameStatus::Check
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
