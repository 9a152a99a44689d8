use macro_emitter::EmitError;

/// Errors during recipe loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse recipe: {0}")]
    ParseError(String),

    #[error("unknown recipe format: {0}")]
    UnknownFormat(String),

    #[error("recipe version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("migration failed from version {from} to {to}: {reason}")]
    MigrationFailed { from: u32, to: u32, reason: String },
}

/// Errors while rendering a recipe into a macro script.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("step {index} ({step}) failed: {source}")]
    StepFailed {
        index: usize,
        step: String,
        #[source]
        source: EmitError,
    },

    #[error("failed to write script: {0}")]
    Io(#[from] std::io::Error),
}
