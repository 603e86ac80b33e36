// the best score ever reached lives in a plain text file holding a single integer
use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum HighScoreError {
    #[error("IO error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid high score in {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<u32, HighScoreError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        contents
            .trim()
            .parse::<u32>()
            .map_err(|source| HighScoreError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Stored high score, 0 when the file is missing or unreadable.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(score) => {
                info!(score, path = %self.path.display(), "High score loaded");
                score
            }
            Err(HighScoreError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No high score file yet");
                0
            }
            Err(e) => {
                warn!("Ignoring high score: {}", e);
                0
            }
        }
    }

    /// Overwrites the file with `score`.
    pub fn save(&self, score: u32) -> Result<(), HighScoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(score, path = %self.path.display(), "High score saved");
        Ok(())
    }
}
