use hfss_types::ParseTokenError;

/// Errors from macro emission.
///
/// `InvalidConfiguration` is always raised before anything reaches the sink.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("failed to write macro text: {0}")]
    Io(#[from] std::io::Error),
}

impl EmitError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        EmitError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, EmitError::InvalidConfiguration { .. })
    }
}

impl From<ParseTokenError> for EmitError {
    fn from(e: ParseTokenError) -> Self {
        EmitError::invalid(e.to_string())
    }
}
