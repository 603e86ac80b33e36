use std::path::PathBuf;
use std::time::Duration;

/// Game configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// File holding the persisted high score
    pub high_score_path: PathBuf,
    /// File the log is written to (the terminal is busy drawing the game)
    pub log_path: PathBuf,
    /// Default log filter, used when RUST_LOG is not set
    pub log_level: String,
    /// Frames drawn per second
    pub frame_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from("highscore.txt"),
            log_path: PathBuf::from("snake.log"),
            log_level: "info".to_string(),
            frame_rate: 60,
        }
    }
}

impl GameConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("SNAKE_HIGH_SCORE_FILE") {
            if path.trim().is_empty() {
                tracing::warn!("SNAKE_HIGH_SCORE_FILE is empty, using default");
            } else {
                config.high_score_path = PathBuf::from(path);
            }
        }

        if let Some(path) = lookup("SNAKE_LOG_FILE") {
            if path.trim().is_empty() {
                tracing::warn!("SNAKE_LOG_FILE is empty, using default");
            } else {
                config.log_path = PathBuf::from(path);
            }
        }

        if let Some(level) = lookup("SNAKE_LOG_LEVEL") {
            config.log_level = level;
        }

        if let Some(frame_rate) = lookup("SNAKE_FRAME_RATE") {
            if let Ok(parsed) = frame_rate.parse::<u32>() {
                if (1..=240).contains(&parsed) {
                    config.frame_rate = parsed;
                } else {
                    tracing::warn!("SNAKE_FRAME_RATE must be 1-240, using default");
                }
            } else {
                tracing::warn!("Invalid SNAKE_FRAME_RATE '{}', using default", frame_rate);
            }
        }

        config
    }

    /// Time budget of one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate.max(1)))
    }
}
