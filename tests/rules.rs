//! End-to-end rule scenarios through the public API.

use chess_duel::engine::{
    Board, CastlingRights, ChessError, Color, Game, GameStatus, Move, PieceKind, Square,
    attack_targets, is_checkmate, is_in_check, moves_for,
};

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col).unwrap()
}

fn play(game: &mut Game, from: (i32, i32), to: (i32, i32)) {
    game.make_move(Move::new(sq(from.0, from.1), sq(to.0, to.1)))
        .unwrap_or_else(|e| panic!("{from:?}->{to:?} rejected: {e}"));
}

// =====================================================================
// Opening scenario
// =====================================================================

#[test]
fn king_pawn_opening() {
    let mut game = Game::new();
    let out = game
        .make_move(Move::new(sq(6, 4), sq(4, 4)))
        .expect("e2-e4 is legal");
    assert_eq!(out.side_to_move, Color::Black);
    assert_eq!(out.status, GameStatus::Normal);
    let pawn = game.board().piece_at(sq(4, 4)).unwrap();
    assert_eq!(pawn.kind, PieceKind::Pawn);
    assert_eq!(pawn.color, Color::White);
    assert_eq!(pawn.position.row(), 4);
}

// =====================================================================
// Castling scenarios
// =====================================================================

#[test]
fn open_kingside_castles_for_both_colours() {
    let rows = [
        "rnbqk  r", "pppppppp", "        ", "        ", "        ", "        ",
        "PPPPPPPP", "RNBQK  R",
    ];
    let mut game = Game::from_text(&rows, Color::White).unwrap();

    assert!(game.moves_from(sq(7, 4)).contains(&sq(7, 6)));
    play(&mut game, (7, 4), (7, 6));
    assert_eq!(
        game.board().piece_at(sq(7, 5)).map(|p| (p.kind, p.color)),
        Some((PieceKind::Rook, Color::White))
    );

    assert!(game.moves_from(sq(0, 4)).contains(&sq(0, 6)));
    play(&mut game, (0, 4), (0, 6));
    assert_eq!(
        game.board().piece_at(sq(0, 5)).map(|p| (p.kind, p.color)),
        Some((PieceKind::Rook, Color::Black))
    );
    assert!(game.board().is_empty(sq(0, 7)));
}

#[test]
fn castling_unavailable_when_destination_attacked() {
    // Black bishop on [3,2] reaches [7,6] through the empty f-pawn square.
    let rows = [
        "    k   ", "        ", "        ", "  b     ", "        ", "        ",
        "PPPPP PP", "R   K  R",
    ];
    let game = Game::from_text(&rows, Color::White).unwrap();
    let king_moves = game.moves_from(sq(7, 4));
    assert!(!king_moves.contains(&sq(7, 6)));
    assert!(king_moves.contains(&sq(7, 2)));
}

#[test]
fn castling_rights_survive_rook_moves() {
    // Only the king's movement is tracked; a rook that leaves and returns
    // still castles.
    let rows = [
        "    k   ", "p       ", "        ", "        ", "        ", "        ",
        "        ", "R   K   ",
    ];
    let mut game = Game::from_text(&rows, Color::White).unwrap();
    play(&mut game, (7, 0), (6, 0));
    play(&mut game, (1, 0), (2, 0));
    play(&mut game, (6, 0), (7, 0));
    play(&mut game, (2, 0), (3, 0));
    assert!(game.moves_from(sq(7, 4)).contains(&sq(7, 2)));
    assert_eq!(game.castling(), CastlingRights::NONE_MOVED);
}

// =====================================================================
// Check and mate
// =====================================================================

#[test]
fn scholars_mate() {
    let mut game = Game::new();
    play(&mut game, (6, 4), (4, 4));
    play(&mut game, (1, 4), (3, 4));
    play(&mut game, (7, 5), (4, 2));
    play(&mut game, (0, 1), (2, 2));
    play(&mut game, (7, 3), (3, 7));
    play(&mut game, (0, 6), (2, 5));
    play(&mut game, (3, 7), (1, 5));
    assert_eq!(game.status(), GameStatus::GameOver);
    assert!(is_checkmate(Color::Black, game.board()));
    assert!(matches!(
        game.make_move(Move::new(sq(1, 0), sq(2, 0))),
        Err(ChessError::GameOver)
    ));
}

#[test]
fn check_is_detected_after_attacking_move() {
    let mut game = Game::new();
    play(&mut game, (6, 4), (4, 4));
    play(&mut game, (1, 5), (2, 5));
    play(&mut game, (7, 3), (3, 7));
    // The queen's destination list now includes the black king's square.
    let queen = game.board().piece_at(sq(3, 7)).unwrap();
    assert!(attack_targets(&queen, game.board()).contains(&sq(0, 4)));
    assert!(is_in_check(Color::Black, game.board()));
    assert_eq!(game.status(), GameStatus::Check);
}

#[test]
fn checkmate_requires_check() {
    // Stalemated black king: no moves, not in check, not mate.
    let board = Board::from_text(&[
        "k       ", "  K     ", " Q      ", "        ", "        ", "        ",
        "        ", "        ",
    ])
    .unwrap();
    assert!(!is_checkmate(Color::Black, &board));
    let game = Game::from_board(board, Color::Black);
    assert_eq!(game.status(), GameStatus::Normal);
    assert!(!game.moves_for_color(Color::Black).is_empty());
}

// =====================================================================
// Properties over reachable positions
// =====================================================================

#[test]
fn generated_moves_stay_on_board_and_off_friends() {
    let mut game = Game::new();
    let line = [
        ((6, 4), (4, 4)),
        ((1, 3), (3, 3)),
        ((4, 4), (3, 3)),
        ((0, 3), (3, 3)),
        ((7, 1), (5, 2)),
        ((3, 3), (3, 0)),
    ];
    for (from, to) in line {
        play(&mut game, from, to);
        let board = game.board();
        for piece in board.pieces() {
            for dest in moves_for(&piece, board, game.castling()) {
                assert!(dest.row() < 8 && dest.col() < 8);
                assert_ne!(board.color_at(dest), Some(piece.color));
            }
        }
        let text = board.to_text();
        assert_eq!(&Board::from_text(&text).unwrap(), board);
    }
}

#[test]
fn rejected_moves_do_not_mutate() {
    let mut game = Game::new();
    let snapshot = game.clone();
    let attempts = [
        Move::new(sq(3, 3), sq(2, 3)),
        Move::new(sq(1, 0), sq(2, 0)),
        Move::new(sq(7, 0), sq(5, 0)),
        Move::new(sq(7, 4), sq(7, 6)),
    ];
    for mv in attempts {
        assert!(game.make_move(mv).is_err(), "{mv} should be rejected");
        assert_eq!(game, snapshot);
    }
}
