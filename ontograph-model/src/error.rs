//! Error types for ontograph-model

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Model composition error type
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying graph error
    #[error(transparent)]
    Core(#[from] ontograph_core::Error),

    /// Kind resolution or view projection error
    #[error(transparent)]
    Personality(#[from] ontograph_personality::Error),

    /// The bound reasoner failed
    #[error("reasoner error: {0}")]
    Reasoner(String),
}

impl Error {
    /// Create a reasoner error
    pub fn reasoner(msg: impl Into<String>) -> Self {
        Error::Reasoner(msg.into())
    }
}
