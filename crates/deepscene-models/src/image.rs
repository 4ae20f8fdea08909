//! Hand-off request for the external image-generation collaborator.
//!
//! The engine never calls an image backend itself. Callers that do build an
//! `ImageRequest` from a finished `SceneResult` and pass the prompt through
//! unchanged.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::SceneResult;

/// Image generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImageRequest {
    /// Prompt text, taken verbatim from `SceneResult::image_prompt`
    pub prompt: String,

    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,
}

impl ImageRequest {
    /// Default output width (16:9 storyboard frame)
    pub const DEFAULT_WIDTH: u32 = 1024;

    /// Default output height (16:9 storyboard frame)
    pub const DEFAULT_HEIGHT: u32 = 576;

    /// Build a request for an analyzed scene.
    pub fn for_scene(scene: &SceneResult, width: u32, height: u32) -> Self {
        Self {
            prompt: scene.image_prompt.clone(),
            width,
            height,
        }
    }
}
