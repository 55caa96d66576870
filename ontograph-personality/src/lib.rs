//! Ontology personalities: kind resolution and typed projections over
//! RDF graphs.
//!
//! A *personality* is the policy deciding what a graph node may be viewed
//! as: a class, a property, an individual, an anonymous class expression.
//! Resolution combines four signals — builtin vocabulary, reserved system
//! namespaces, explicit `rdf:type` declarations, and structural shape —
//! under a punning policy that keeps mutually exclusive kinds apart.
//!
//! # Design principles
//!
//! - **Policy over mechanism.** The graph never knows about kinds; a
//!   personality interprets it. Swapping the personality reinterprets the
//!   same triples (OWL2 Full vs DL vs Lite vs RDFS).
//! - **Deterministic conflict resolution.** When punning rules collide,
//!   [`OntKind`] precedence order decides; triple insertion order never
//!   does.
//! - **Termination.** Structural checks recurse through class expressions,
//!   guarded by a per-query stack; cyclic definitions fail with
//!   [`Error::RecursionDetected`] instead of diverging.
//!
//! # Example
//!
//! ```
//! use ontograph_core::{GraphRef, MemoryGraph, Node, Triple};
//! use ontograph_personality::{profiles, OntKind};
//! use ontograph_vocab::{owl, rdf};
//!
//! let g: GraphRef = MemoryGraph::new();
//! g.add(Triple::new(
//!     Node::iri("http://example.org/Pizza"),
//!     Node::iri(rdf::TYPE),
//!     Node::iri(owl::CLASS),
//! ))?;
//!
//! let personality = profiles::owl2_dl();
//! let class = personality.view(&g, &Node::iri("http://example.org/Pizza"), OntKind::Class)?;
//! assert_eq!(class.kind(), OntKind::Class);
//! # Ok::<(), ontograph_personality::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod kind;
pub mod profiles;
pub mod punning;
pub mod rdf_list;
pub mod registry;
pub mod view;

pub use config::{Construct, PersonalityConfig};
pub use error::{Error, Result};
pub use kind::OntKind;
pub use punning::Punnings;
pub use registry::{
    EligibilityFn, EvalCtx, KindBinding, Personality, PersonalityBuilder, Reserved,
};
pub use view::{
    create_cardinality_restriction, OntClass, OntIndividual, OntObject, OntProperty,
};
