//! Error types for ontograph-repo

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Repository error type
#[derive(Error, Debug)]
pub enum Error {
    /// No graph is registered or resolvable under the id
    #[error("no graph with id '{0}'")]
    DoesNotExist(String),

    /// The id is already taken
    #[error("id '{0}' already exists")]
    AlreadyExists(String),

    /// The graph does not meet the repository's shape requirement
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// The backing store or source failed
    #[error("store error: {0}")]
    Store(String),

    /// Underlying graph error
    #[error(transparent)]
    Core(#[from] ontograph_core::Error),
}

impl Error {
    /// Create a does-not-exist error
    pub fn does_not_exist(id: impl Into<String>) -> Self {
        Error::DoesNotExist(id.into())
    }

    /// Create an already-exists error
    pub fn already_exists(id: impl Into<String>) -> Self {
        Error::AlreadyExists(id.into())
    }

    /// Create an invalid-graph error
    pub fn invalid_graph(msg: impl Into<String>) -> Self {
        Error::InvalidGraph(msg.into())
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Error::Store(msg.into())
    }
}
