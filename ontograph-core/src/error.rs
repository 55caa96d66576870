//! Error types for ontograph-core

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Operation attempted on a closed graph
    #[error("Graph is closed: {0}")]
    ClosedGraph(String),

    /// Size requested for a composition that cannot report a fast count
    #[error("Size is not computable: {0}")]
    NotSized(String),

    /// Mutation attempted through a read-only graph
    #[error("Graph is read-only: {0}")]
    ReadOnlyGraph(String),

    /// Mutation attempted on a locked prefix mapping
    #[error("Prefix mapping is locked: {0}")]
    LockedPrefixMapping(String),

    /// Malformed input to a construction call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A structural-change listener reported a failure
    #[error("Listener error: {0}")]
    Listener(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a closed-graph error
    pub fn closed(msg: impl Into<String>) -> Self {
        Error::ClosedGraph(msg.into())
    }

    /// Create a not-sized error
    pub fn not_sized(msg: impl Into<String>) -> Self {
        Error::NotSized(msg.into())
    }

    /// Create a read-only error
    pub fn read_only(msg: impl Into<String>) -> Self {
        Error::ReadOnlyGraph(msg.into())
    }

    /// Create a locked-prefix-mapping error
    pub fn locked_prefixes(msg: impl Into<String>) -> Self {
        Error::LockedPrefixMapping(msg.into())
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a listener error
    pub fn listener(msg: impl Into<String>) -> Self {
        Error::Listener(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
