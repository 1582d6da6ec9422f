use chess_duel::ai::RandomOpponent;
use chess_duel::config::AppConfig;
use chess_duel::selfplay::{Finish, play_out};

fn main() {
    // Initialize tracing (structured logging).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chess_duel=info".into()),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!("chess-duel v{} {config:?}", env!("CARGO_PKG_VERSION"));

    // One generator per side, both derived from the seed.
    let (white, black) = match config.seed {
        Some(seed) => (
            RandomOpponent::seeded(seed),
            RandomOpponent::seeded(seed.wrapping_add(1)),
        ),
        None => (RandomOpponent::new(), RandomOpponent::new()),
    };

    let report = match play_out(&config, &white, &black) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("self-play aborted: {e}");
            std::process::exit(1);
        }
    };

    println!("{}", report.game.board());
    match report.finish {
        Finish::GameOver { loser } => println!("{} wins after {} plies", !loser, report.plies),
        Finish::NoMoves { side } => println!("{side} has no moves after {} plies", report.plies),
        Finish::PlyLimit => println!("stopped at {} plies", report.plies),
    }
}
