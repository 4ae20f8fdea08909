//! Error types for engine construction.
//!
//! Analysis itself only fails with `SceneError::InvalidInput`; everything
//! here is raised while loading the lexicon or assembling an analyzer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for engine setup operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while building the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read lexicon {path}: {source}")]
    LexiconRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lexicon JSON parse error: {0}")]
    LexiconParse(#[from] serde_json::Error),

    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Create a lexicon read error.
    pub fn lexicon_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LexiconRead {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid lexicon error.
    pub fn invalid_lexicon(message: impl Into<String>) -> Self {
        Self::InvalidLexicon(message.into())
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
