mod app;
mod board;
mod config;
mod game;
mod grid;
mod highscore;
mod input;
mod render;
mod snake;
mod terminal;

use std::fs::File;
use std::sync::Mutex;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::GameConfig;
use crate::highscore::HighScoreStore;
use crate::terminal::TerminalSession;

fn init_logging(config: &GameConfig) -> anyhow::Result<()> {
    // the terminal shows the game, so the log goes to a file
    let log_file = File::create(&config.log_path)
        .with_context(|| format!("cannot create log file {}", config.log_path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = GameConfig::load_or_default();
    init_logging(&config)?;
    info!("Snake Duel v{}", env!("CARGO_PKG_VERSION"));

    let store = HighScoreStore::new(&config.high_score_path);
    info!(
        "Configuration loaded: high score in {}, {} fps",
        store.path().display(),
        config.frame_rate
    );
    let mut app = App::new(store);

    let mut session = TerminalSession::start().context("the game needs an interactive terminal")?;
    app.play(&mut session, config.frame_duration());
    // restore the terminal before printing anything else
    drop(session);

    println!("High Score: {}", app.high_score());
    info!("Bye");
    Ok(())
}
