//! error types surfaced by the preprocessor
use std::path::Path;
use thiserror::Error;

/// Result type for preprocessor operations
pub type Result<T> = std::result::Result<T, PreprocessorError>;

/// Error type for preprocessor operations
#[derive(Error, Debug)]
pub enum PreprocessorError {
    /// vectorization was requested before a vocabulary was fitted or loaded
    #[error("vectorizer not fitted; call fit_vectorize or load_vectorizer first")]
    UnfittedVectorizer,

    /// persisted vectorizer state couldn't be written, read, or parsed
    #[error("could not persist vectorizer at {path}: {reason}")]
    Persistence {
        /// location of the persisted state
        path: String,

        /// what went wrong
        reason: String,
    },

    /// stop word or stemmer data is unavailable
    #[error("missing linguistic resource: {0}")]
    MissingResource(String),

    /// a configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl PreprocessorError {
    /// create a `Persistence` error for the given location
    pub(crate) fn persistence(path: &Path, reason: impl ToString) -> Self {
        PreprocessorError::Persistence {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}
