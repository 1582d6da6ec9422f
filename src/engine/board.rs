//! Mailbox board representation.
//!
//! `Board` is an 8×8 grid of optional pieces indexed by (row, col). Each
//! occupied cell stores a `Piece` that also records its own square; the
//! relocation helpers here keep the two in sync.

use std::fmt;

use crate::engine::types::{ChessError, Color, Piece, PieceKind, Square};

/// Text rows of the standard initial position.
pub const STARTING_TEXT: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "        ", "        ", "        ", "        ", "PPPPPPPP",
    "RNBQKBNR",
];

/// An 8×8 chess board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Board {
    /// Create an empty board with no pieces.
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting position.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for sq in Square::all() {
            let letter = STARTING_TEXT[sq.row() as usize].chars().nth(sq.col() as usize);
            if let Some((color, kind)) = letter.and_then(PieceKind::from_char) {
                board.put(sq, kind, color);
            }
        }
        board
    }

    /// Parse 8 rows of 8 characters each.
    ///
    /// Piece letters are `pnbrqk`, uppercase for white and lowercase for
    /// black; a space is an empty square. Piece counts are not validated, so
    /// a board without kings is accepted here.
    pub fn from_text<S: AsRef<str>>(rows: &[S]) -> Result<Self, ChessError> {
        if rows.len() != 8 {
            return Err(ChessError::InvalidBoardText(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != 8 {
                return Err(ChessError::InvalidBoardText(format!(
                    "row {row} has {width} squares instead of 8"
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let (color, kind) = PieceKind::from_char(ch).ok_or_else(|| {
                    ChessError::InvalidBoardText(format!(
                        "invalid character '{ch}' at [{row},{col}]"
                    ))
                })?;
                let sq = Square::try_new(row as i32, col as i32)?;
                board.put(sq, kind, color);
            }
        }
        Ok(board)
    }

    /// Export as 8 rows of 8 characters, the inverse of [`Board::from_text`].
    pub fn to_text(&self) -> [String; 8] {
        std::array::from_fn(|row| {
            self.cells[row]
                .iter()
                .map(|cell| cell.map_or(' ', Piece::to_char))
                .collect()
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl Board {
    /// What piece (if any) is on a given square?
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Color of the occupant, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Every piece on the board, row-major, each carrying its own square.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    /// Every piece of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Find the king square for the given colour.
    ///
    /// Returns the first king found in row-major order; boards with several
    /// kings of one colour are not rejected.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.position)
    }
}

// ---------------------------------------------------------------------------
// Piece manipulation
// ---------------------------------------------------------------------------

impl Board {
    /// Place a piece on a square, replacing any occupant.
    pub fn put(&mut self, sq: Square, kind: PieceKind, color: Color) {
        self.cells[sq.row() as usize][sq.col() as usize] = Some(Piece::new(kind, color, sq));
    }

    /// Remove and return whatever stands on `sq`.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Move the piece on `from` to `to`, rewriting its stored position.
    /// Returns the captured occupant of `to`, if any. No rule checks.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.take(from)?;
        let captured = self.take(to);
        self.cells[to.row() as usize][to.col() as usize] = Some(Piece {
            position: to,
            ..moving
        });
        captured
    }
}

// ---------------------------------------------------------------------------
// Board display (8×8 text grid)
// ---------------------------------------------------------------------------

impl fmt::Display for Board {
    /// Row 0 at top, empty squares as `.`, useful for logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row} ")?;
            for (col, cell) in cells.iter().enumerate() {
                write!(f, "{}", cell.map_or('.', Piece::to_char))?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  0 1 2 3 4 5 6 7")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
