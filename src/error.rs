use std::io;

use thiserror::Error;

/// Errors raised when validating or parsing a [`crate::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures while reading or writing the high-score file.
///
/// These never leave [`crate::HighScoreStore`]'s public `load`/`save`; they are
/// logged and dropped there.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("high score file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}
