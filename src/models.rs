//! Request/response shapes for a caller that drives the engine over some
//! transport of its own. Coordinates travel as `[row, col]` pairs and boards
//! as 8 text rows.

use serde::{Deserialize, Serialize};

use crate::engine::game::{Game, MoveOutcome};
use crate::engine::types::{ChessError, Color, GameStatus, Move, PieceKind, Square};

// ---------------------------------------------------------------------------
// Request models
// ---------------------------------------------------------------------------

/// Board import: 8 rows of 8 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBoardRequest {
    pub board: Vec<String>,
    #[serde(default = "default_side")]
    pub side_to_move: Color,
}

fn default_side() -> Color {
    Color::White
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub from: [i32; 2],
    pub to: [i32; 2],
}

impl TryFrom<MoveRequest> for Move {
    type Error = ChessError;

    fn try_from(req: MoveRequest) -> Result<Self, Self::Error> {
        Ok(Move::new(
            Square::try_from(req.from)?,
            Square::try_from(req.to)?,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovesQuery {
    pub square: [i32; 2],
}

// ---------------------------------------------------------------------------
// Response models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: Vec<String>,
    pub side_to_move: Color,
    pub status: GameStatus,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        GameSnapshot {
            board: game.to_text().into(),
            side_to_move: game.side_to_move(),
            status: game.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub board: Vec<String>,
    pub side_to_move: Color,
    pub status: GameStatus,
    /// Kind of the piece that moved.
    pub piece: PieceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured: Option<PieceKind>,
    pub castled: bool,
}

impl MoveResponse {
    fn new(game: &Game, outcome: &MoveOutcome) -> Self {
        MoveResponse {
            board: game.to_text().into(),
            side_to_move: outcome.side_to_move,
            status: outcome.status,
            piece: outcome.piece.kind,
            captured: outcome.captured.map(|p| p.kind),
            castled: outcome.castled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovesResponse {
    pub from: Square,
    pub moves: Vec<Square>,
}

/// Rejection, with the machine code from [`ChessError::code`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<ChessError> for ErrorResponse {
    fn from(err: ChessError) -> Self {
        ErrorResponse {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Start a game from an imported board.
pub fn load_board(req: &LoadBoardRequest) -> Result<Game, ErrorResponse> {
    Ok(Game::from_text(&req.board, req.side_to_move)?)
}

/// Validate and play a move request against `game`.
pub fn apply_move(game: &mut Game, req: MoveRequest) -> Result<MoveResponse, ErrorResponse> {
    let mv = Move::try_from(req)?;
    let outcome = game.make_move(mv)?;
    Ok(MoveResponse::new(game, &outcome))
}

/// Move-options query for one square.
pub fn query_moves(game: &Game, query: MovesQuery) -> Result<MovesResponse, ErrorResponse> {
    let from = Square::try_from(query.square)?;
    Ok(MovesResponse {
        from,
        moves: game.moves_from(from),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
