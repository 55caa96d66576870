//! Loader seams: where graphs come from.
//!
//! Document retrieval, parsing, and persistence live behind these traits;
//! the repositories only orchestrate. Both traits are object-safe and
//! synchronous, matching the caller contract of the composition layer.

use ontograph_core::GraphRef;

use crate::error::Result;

/// Resolves a location string (file path, IRI, catalog key) to a graph.
pub trait GraphSource: Send + Sync {
    fn load(&self, location: &str) -> Result<GraphRef>;
}

/// A named collection of persistent graphs.
pub trait GraphStore: Send + Sync {
    /// Open the graph stored under `name`.
    fn open(&self, name: &str) -> Result<GraphRef>;

    /// All stored graph names.
    fn names(&self) -> Result<Vec<String>>;

    /// Whether a graph is stored under `name`. The default scans `names`.
    fn has(&self, name: &str) -> bool {
        self.names()
            .map(|names| names.iter().any(|n| n == name))
            .unwrap_or(false)
    }
}
