use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A required external credential or setting is missing.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
