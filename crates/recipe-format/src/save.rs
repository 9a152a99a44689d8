use macro_emitter::EmitterConfig;
use serde::Serialize;

use crate::metadata::RecipeMetadata;
use crate::recipe::{Recipe, Step};

/// Format identifier written into every recipe.
pub const FORMAT_ID: &str = "hfss-macro-recipe";

/// Current recipe format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level file structure.
#[derive(Debug, Serialize)]
pub struct RecipeFile<'a> {
    /// Format identifier.
    pub format: &'static str,
    /// Format version number.
    pub version: u32,
    pub metadata: &'a RecipeMetadata,
    pub config: &'a EmitterConfig,
    pub steps: &'a [Step],
}

/// Serialize a recipe to a pretty-printed JSON string.
pub fn save_recipe(recipe: &Recipe) -> Result<String, serde_json::Error> {
    let file = RecipeFile {
        format: FORMAT_ID,
        version: FORMAT_VERSION,
        metadata: &recipe.metadata,
        config: &recipe.config,
        steps: &recipe.steps,
    };
    serde_json::to_string_pretty(&file)
}
