//! Computer-vs-computer game loop used by the binary.

use tracing::{debug, info};

use crate::ai::Opponent;
use crate::config::AppConfig;
use crate::engine::game::Game;
use crate::engine::types::{ChessError, Color, GameStatus};

/// How a self-play game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finish {
    /// The side to move is mated or lost its king.
    GameOver { loser: Color },
    /// The side to move had no pseudo-legal move at all.
    NoMoves { side: Color },
    /// The ply limit was reached.
    PlyLimit,
}

/// Summary of a finished self-play game.
#[derive(Clone, Debug)]
pub struct Report {
    pub plies: u32,
    pub finish: Finish,
    pub game: Game,
}

/// Let `white` and `black` alternate until the game ends or the ply limit
/// from `config` is hit.
pub fn play_out(
    config: &AppConfig,
    white: &dyn Opponent,
    black: &dyn Opponent,
) -> Result<Report, ChessError> {
    let mut game = Game::new();
    let mut plies = 0;

    info!(
        white = white.name(),
        black = black.name(),
        max_plies = config.max_plies,
        "self-play started"
    );

    let finish = loop {
        if game.status() == GameStatus::GameOver {
            break Finish::GameOver {
                loser: game.side_to_move(),
            };
        }
        if plies >= config.max_plies {
            break Finish::PlyLimit;
        }

        let side = game.side_to_move();
        let player = match side {
            Color::White => white,
            Color::Black => black,
        };
        let Some(mv) = player.choose_move(&game) else {
            break Finish::NoMoves { side };
        };

        let outcome = game.make_move(mv)?;
        plies += 1;
        info!(ply = plies, %side, %mv, status = %outcome.status, "move");
        if config.show_board {
            debug!("\n{}", game.board());
        }
    };

    info!(plies, ?finish, "self-play finished");
    Ok(Report {
        plies,
        finish,
        game,
    })
}
