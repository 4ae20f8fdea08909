//! Errors surfaced to callers of the analysis entry points.

use thiserror::Error;

/// Errors returned by scene analysis.
///
/// Analysis is total over non-blank input, so the only caller-visible
/// failure is a rejected description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SceneError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether this error was caused by the caller's input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result alias for analysis operations.
pub type AnalysisResult<T> = Result<T, SceneError>;
