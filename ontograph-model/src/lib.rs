//! Ontology model composition for ontograph.
//!
//! Ties the other crates together: an [`OntModel`] is a
//! [`UnionGraph`](ontograph_core::UnionGraph) base-plus-imports composition
//! paired with a [`Personality`](ontograph_personality::Personality), with
//! an optional [`Reasoner`] bound in front of the base graph. Everything
//! else — storage, retrieval, entailment — stays behind trait seams.

pub mod error;
pub mod model;
pub mod reasoner;

pub use error::{Error, Result};
pub use model::OntModel;
pub use reasoner::{NullReasoner, Reasoner};
