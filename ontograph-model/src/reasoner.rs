//! The reasoner seam.

use ontograph_core::GraphRef;

use crate::error::Result;

/// Opaque graph transformer bound in front of a model's base graph.
///
/// Implementations typically return a wrapper that answers `find` with
/// entailed triples alongside asserted ones. The composition layer treats
/// the result as just another graph.
pub trait Reasoner: Send + Sync {
    fn bind(&self, graph: GraphRef) -> Result<GraphRef>;
}

/// Passthrough reasoner: no entailment, the graph is bound as-is.
pub struct NullReasoner;

impl Reasoner for NullReasoner {
    fn bind(&self, graph: GraphRef) -> Result<GraphRef> {
        Ok(graph)
    }
}
