//! # ontograph Core
//!
//! Graph-composition core for the ontograph ontology layer.
//!
//! This crate provides:
//! - The RDF term/triple data model (`Node`, `Triple`, `TriplePattern`)
//! - The `Graph` storage seam and the in-memory reference implementation
//! - Read-only and event wrappers
//! - `UnionGraph`: cycle-tolerant composition of a base graph and subgraphs
//! - Topology utilities: unwrapping, leaf discovery, distinctness and
//!   sizedness analysis, import-closure tree construction
//!
//! ## Design Principles
//!
//! 1. **Identity over content**: structural algorithms compare graphs by
//!    shared-allocation identity, never by triple content
//! 2. **Visited-set discipline**: every traversal carries its own
//!    identity-keyed visited set; termination never relies on the structure
//!    being acyclic
//! 3. **Synchronous, caller-serialized**: no internal cross-operation
//!    locking; concurrent structural mutation is a caller error
//!
//! ## Example
//!
//! ```
//! use ontograph_core::{Graph, MemoryGraph, UnionGraph, Node, Triple, TriplePattern};
//!
//! let base = MemoryGraph::new();
//! base.add(Triple::new(
//!     Node::iri("http://example.org/a"),
//!     Node::iri("http://example.org/p"),
//!     Node::literal("hello"),
//! ))?;
//!
//! let union = UnionGraph::new(base);
//! union.add_sub_graph(MemoryGraph::new())?;
//! assert_eq!(union.find(&TriplePattern::ANY).count(), 1);
//! # Ok::<(), ontograph_core::Error>(())
//! ```

pub mod error;
pub mod graph;
pub mod prefix;
pub mod term;
pub mod topology;
pub mod union;
pub mod wrappers;

// Re-export main types
pub use error::{Error, Result};
pub use graph::{graph_key, same_graph, Graph, GraphRef, MemoryGraph};
pub use prefix::PrefixMapping;
pub use term::{BlankId, Literal, Node, Triple, TriplePattern};
pub use topology::{
    collect_prefixes, data_graphs, direct_sub_graphs, flat_hierarchy, is_distinct,
    is_ont_union_graph, is_same_base, is_sized, make_ont_union, ont_header, unwrap, OntHeader,
};
pub use union::{UnionGraph, UnionListener};
pub use wrappers::{EventGraph, GraphListener, ReadOnlyGraph};
