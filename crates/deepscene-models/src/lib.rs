//! Shared data models for the DeepScene analysis engine.
//!
//! This crate provides Serde-serializable types for:
//! - Scene analysis results and mood readings
//! - Analysis requests with optional style overrides
//! - Partial text analysis and genre catalog entries
//! - Image generation hand-off requests

pub mod error;
pub mod genre;
pub mod image;
pub mod scene;

// Re-export common types
pub use error::{AnalysisResult, SceneError};
pub use genre::GenreInfo;
pub use image::ImageRequest;
pub use scene::{MoodReading, SceneRequest, SceneResult, TextAnalysis};
