//! Genre catalog entries.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A genre known to the engine, as listed in the genre catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenreInfo {
    /// Genre label
    pub name: String,

    /// Visual style used for image prompts
    pub style: String,

    /// Keywords that score toward this genre
    pub keywords: Vec<String>,
}
