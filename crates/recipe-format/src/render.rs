use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use macro_emitter::MacroSession;
use tracing::{info, instrument};

use crate::errors::RenderError;
use crate::recipe::Recipe;

/// Replay every step of a recipe into `session`, in order.
///
/// Stops at the first failing step. Output of earlier steps stays in the
/// sink; the failing step itself writes nothing unless the sink errored.
#[instrument(skip(recipe, session), fields(name = %recipe.metadata.name, steps = recipe.steps.len()))]
pub fn render_recipe<W: Write>(
    recipe: &Recipe,
    session: &mut MacroSession<W>,
) -> Result<(), RenderError> {
    for (index, step) in recipe.steps.iter().enumerate() {
        step.apply(session)
            .map_err(|source| RenderError::StepFailed {
                index,
                step: step.label(),
                source,
            })?;
    }
    info!(blocks = session.blocks_written(), "recipe rendered");
    Ok(())
}

/// Render a recipe with its own configuration into a string.
pub fn render_to_string(recipe: &Recipe) -> Result<String, RenderError> {
    let mut session = MacroSession::with_config(Vec::new(), recipe.config.clone());
    render_recipe(recipe, &mut session)?;
    Ok(session.text())
}

/// Render a recipe straight into a `.vbs` file at `path`.
pub fn write_script_file(recipe: &Recipe, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let file = File::create(path.as_ref())?;
    let mut session = MacroSession::with_config(BufWriter::new(file), recipe.config.clone());
    render_recipe(recipe, &mut session)?;
    session.into_inner().flush()?;
    Ok(())
}
