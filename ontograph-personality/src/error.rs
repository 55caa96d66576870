//! Error types for ontograph-personality

use thiserror::Error;

use crate::kind::OntKind;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Personality / type-resolution error type
#[derive(Error, Debug)]
pub enum Error {
    /// Eligibility check failed for a requested type projection
    #[error("node {node} cannot be viewed as {kind} under personality '{personality}'")]
    CannotViewAs {
        node: String,
        kind: OntKind,
        personality: String,
    },

    /// A self-referential definition was encountered during evaluation
    #[error("recursion detected while evaluating {node} as {kind}")]
    RecursionDetected { node: String, kind: OntKind },

    /// The active personality does not support the requested construct
    #[error("construct '{what}' is not supported by personality '{personality}'")]
    UnsupportedConstruct { what: String, personality: String },

    /// Invalid personality-builder configuration
    #[error("personality builder: {0}")]
    Builder(String),

    /// Malformed input to a construction call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying graph error
    #[error(transparent)]
    Core(#[from] ontograph_core::Error),
}

impl Error {
    /// Create a cannot-view-as error
    pub fn cannot_view_as(
        node: impl ToString,
        kind: OntKind,
        personality: impl Into<String>,
    ) -> Self {
        Error::CannotViewAs {
            node: node.to_string(),
            kind,
            personality: personality.into(),
        }
    }

    /// Create a recursion-detected error
    pub fn recursion(node: impl ToString, kind: OntKind) -> Self {
        Error::RecursionDetected {
            node: node.to_string(),
            kind,
        }
    }

    /// Create an unsupported-construct error
    pub fn unsupported(what: impl Into<String>, personality: impl Into<String>) -> Self {
        Error::UnsupportedConstruct {
            what: what.into(),
            personality: personality.into(),
        }
    }

    /// Create a builder error
    pub fn builder(msg: impl Into<String>) -> Self {
        Error::Builder(msg.into())
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
