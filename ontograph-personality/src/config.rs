//! Personality configuration.
//!
//! Pure data structures, no I/O. A config travels inside a built
//! [`Personality`](crate::registry::Personality) and is immutable from then
//! on; an assembler layer may deserialize one from a configuration
//! document.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Optional ontology constructs a profile may or may not support.
///
/// Requesting an unsupported construct fails with
/// [`Error::UnsupportedConstruct`](crate::error::Error::UnsupportedConstruct).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Construct {
    /// `owl:disjointUnionOf` axioms (OWL2)
    DisjointUnion,
    /// `owl:propertyChainAxiom` (OWL2)
    PropertyChain,
    /// `owl:hasKey` axioms (OWL2)
    HasKey,
    /// Negative property assertions (OWL2)
    NegativeAssertion,
    /// Qualified cardinality restrictions (OWL2)
    QualifiedCardinality,
}

impl Construct {
    pub fn label(&self) -> &'static str {
        match self {
            Construct::DisjointUnion => "DisjointUnion",
            Construct::PropertyChain => "PropertyChain",
            Construct::HasKey => "HasKey",
            Construct::NegativeAssertion => "NegativeAssertion",
            Construct::QualifiedCardinality => "QualifiedCardinality",
        }
    }
}

/// Validation strictness and supported-construct set for a personality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityConfig {
    /// Strict profiles reject structurally eligible but undeclared nodes
    /// in places where the lax profiles infer them.
    pub strict_mode: bool,
    /// Constructs the profile supports.
    pub supported: BTreeSet<Construct>,
}

impl PersonalityConfig {
    /// Lax config with no optional constructs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Config supporting every optional construct.
    pub fn all_constructs() -> Self {
        PersonalityConfig {
            strict_mode: false,
            supported: [
                Construct::DisjointUnion,
                Construct::PropertyChain,
                Construct::HasKey,
                Construct::NegativeAssertion,
                Construct::QualifiedCardinality,
            ]
            .into_iter()
            .collect(),
        }
    }

    pub fn strict(mut self) -> Self {
        self.strict_mode = true;
        self
    }

    pub fn with_construct(mut self, c: Construct) -> Self {
        self.supported.insert(c);
        self
    }

    pub fn without_construct(mut self, c: Construct) -> Self {
        self.supported.remove(&c);
        self
    }

    pub fn supports(&self, c: Construct) -> bool {
        self.supported.contains(&c)
    }
}
