use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Row of this side's back rank. White sets up on rows 6-7.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row this side's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row delta of a pawn step toward the opponent.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The king's setup square, the only square it castles from.
    #[inline]
    pub const fn king_home(self) -> Square {
        Square {
            row: self.back_rank(),
            col: 4,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceKind
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Single uppercase letter for white, lowercase for black.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse a piece letter. Case selects the color.
    pub fn from_char(c: char) -> Option<(Color, PieceKind)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((color, kind))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::King => write!(f, "king"),
        }
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A square on the board as (row, col), both in 0..8.
///
/// Row 0 is black's back rank, row 7 is white's. Serializes as `[row, col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[u8; 2]", try_from = "[i32; 2]")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Checked constructor from signed coordinates.
    #[inline]
    pub fn new(row: i32, col: i32) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Like [`Square::new`], but reports out-of-range coordinates as an error.
    pub fn try_new(row: i32, col: i32) -> Result<Self, ChessError> {
        Self::new(row, col).ok_or(ChessError::InvalidSquare { row, col })
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// The square displaced by (`dr`, `dc`), if still on the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Self::new(self.row as i32 + dr as i32, self.col as i32 + dc as i32)
    }

    /// All 64 squares, row-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl From<Square> for [u8; 2] {
    fn from(sq: Square) -> Self {
        [sq.row, sq.col]
    }
}

impl TryFrom<[i32; 2]> for Square {
    type Error = ChessError;

    fn try_from([row, col]: [i32; 2]) -> Result<Self, Self::Error> {
        Square::try_new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A piece together with the square it stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Square,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Square) -> Self {
        Piece {
            kind,
            color,
            position,
        }
    }

    #[inline]
    pub fn to_char(self) -> char {
        self.kind.to_char(self.color)
    }
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

/// A move request: origin and destination. Promotion and flags don't exist
/// in this rule set; castling is inferred from a two-column king shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

// ---------------------------------------------------------------------------
// CastlingRights
// ---------------------------------------------------------------------------

/// Per-color "king has moved" flags. Only ever flip from false to true.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastlingRights {
    white_king_moved: bool,
    black_king_moved: bool,
}

impl CastlingRights {
    /// Fresh rights: neither king has moved.
    pub const NONE_MOVED: CastlingRights = CastlingRights {
        white_king_moved: false,
        black_king_moved: false,
    };

    #[inline]
    pub fn king_moved(self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    /// Whether `color` may still castle at all.
    #[inline]
    pub fn can_castle(self, color: Color) -> bool {
        !self.king_moved(color)
    }

    /// Record that `color`'s king has moved. Idempotent.
    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_moved = true,
            Color::Black => self.black_king_moved = true,
        }
    }
}

// ---------------------------------------------------------------------------
// GameStatus
// ---------------------------------------------------------------------------

/// Status of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    Normal,
    Check,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &str {
        match self {
            GameStatus::Normal => "normal",
            GameStatus::Check => "check",
            GameStatus::GameOver => "gameOver",
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, GameStatus::GameOver)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors for the chess engine. Every variant is a rejection that
/// leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("square out of bounds: [{row},{col}]")]
    InvalidSquare { row: i32, col: i32 },

    #[error("no piece at {0}")]
    NoPieceAtSquare(Square),

    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongSideToMove { expected: Color, actual: Color },

    #[error("illegal destination {to} for {piece} on {from}")]
    IllegalDestination {
        piece: PieceKind,
        from: Square,
        to: Square,
    },

    #[error("game is already over")]
    GameOver,

    #[error("invalid board text: {0}")]
    InvalidBoardText(String),
}

impl ChessError {
    /// Stable machine-readable code for callers that forward errors.
    pub fn code(&self) -> &'static str {
        match self {
            ChessError::InvalidSquare { .. } => "INVALID_SQUARE",
            ChessError::NoPieceAtSquare(_) => "NO_PIECE_AT_SQUARE",
            ChessError::WrongSideToMove { .. } => "WRONG_SIDE_TO_MOVE",
            ChessError::IllegalDestination { .. } => "ILLEGAL_DESTINATION",
            ChessError::GameOver => "GAME_OVER",
            ChessError::InvalidBoardText(_) => "INVALID_BOARD_TEXT",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_toggle() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn color_orientation() {
        assert_eq!(Color::White.back_rank(), 7);
        assert_eq!(Color::Black.back_rank(), 0);
        assert_eq!(Color::White.pawn_rank(), 6);
        assert_eq!(Color::Black.pawn_rank(), 1);
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.king_home(), Square::new(7, 4).unwrap());
        assert_eq!(Color::Black.king_home(), Square::new(0, 4).unwrap());
    }

    #[test]
    fn piece_kind_char_round_trip() {
        for kind in PieceKind::ALL {
            let wc = kind.to_char(Color::White);
            let bc = kind.to_char(Color::Black);
            assert!(wc.is_ascii_uppercase());
            assert!(bc.is_ascii_lowercase());
            assert_eq!(PieceKind::from_char(wc), Some((Color::White, kind)));
            assert_eq!(PieceKind::from_char(bc), Some((Color::Black, kind)));
        }
    }

    #[test]
    fn piece_kind_from_char_invalid() {
        assert_eq!(PieceKind::from_char('x'), None);
        assert_eq!(PieceKind::from_char(' '), None);
        assert_eq!(PieceKind::from_char('1'), None);
    }

    #[test]
    fn square_bounds() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(-1, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert_eq!(
            Square::try_new(8, 3),
            Err(ChessError::InvalidSquare { row: 8, col: 3 })
        );
    }

    #[test]
    fn square_offset() {
        let sq = Square::new(6, 4).unwrap();
        assert_eq!(sq.offset(-2, 0), Square::new(4, 4));
        assert_eq!(sq.offset(2, 0), None);
        assert_eq!(sq.offset(0, -5), None);
    }

    #[test]
    fn square_all_covers_board() {
        let all: Vec<Square> = Square::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Square::new(0, 0).unwrap());
        assert_eq!(all[63], Square::new(7, 7).unwrap());
    }

    #[test]
    fn square_display() {
        assert_eq!(Square::new(6, 4).unwrap().to_string(), "[6,4]");
    }

    #[test]
    fn castling_rights_one_way() {
        let mut cr = CastlingRights::default();
        assert_eq!(cr, CastlingRights::NONE_MOVED);
        assert!(cr.can_castle(Color::White));
        assert!(cr.can_castle(Color::Black));

        cr.mark_king_moved(Color::White);
        assert!(cr.king_moved(Color::White));
        assert!(!cr.king_moved(Color::Black));

        cr.mark_king_moved(Color::White);
        assert!(!cr.can_castle(Color::White));
    }

    #[test]
    fn game_status_strings() {
        assert_eq!(GameStatus::Normal.as_str(), "normal");
        assert_eq!(GameStatus::Check.as_str(), "check");
        assert_eq!(GameStatus::GameOver.as_str(), "gameOver");
        assert!(GameStatus::GameOver.is_game_over());
        assert!(!GameStatus::Check.is_game_over());
    }

    #[test]
    fn error_codes_and_messages() {
        let err = ChessError::WrongSideToMove {
            expected: Color::White,
            actual: Color::Black,
        };
        assert_eq!(err.code(), "WRONG_SIDE_TO_MOVE");
        assert_eq!(err.to_string(), "it is white's turn, not black's");

        let sq = Square::new(3, 3).unwrap();
        assert_eq!(
            ChessError::NoPieceAtSquare(sq).to_string(),
            "no piece at [3,3]"
        );
    }
}
