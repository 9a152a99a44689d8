use macro_emitter::EmitterConfig;
use serde::Deserialize;

use crate::errors::LoadError;
use crate::metadata::RecipeMetadata;
use crate::recipe::{Recipe, Step};
use crate::save::{FORMAT_ID, FORMAT_VERSION};

/// The top-level file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeFileRaw {
    pub format: String,
    pub version: u32,
    pub metadata: RecipeMetadata,
    #[serde(default)]
    pub config: EmitterConfig,
    pub steps: Vec<Step>,
}

/// Deserialize a recipe from a JSON string.
///
/// Validates the format identifier and version.
pub fn load_recipe(json: &str) -> Result<Recipe, LoadError> {
    let raw: RecipeFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_ID {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    let steps = if raw.version < FORMAT_VERSION {
        crate::migrate::migrate(raw.steps, raw.version, FORMAT_VERSION)?
    } else {
        raw.steps
    };

    tracing::debug!(
        name = %raw.metadata.name,
        steps = steps.len(),
        "recipe loaded"
    );

    Ok(Recipe {
        metadata: raw.metadata,
        config: raw.config,
        steps,
    })
}
