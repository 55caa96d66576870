//! Punning policies.
//!
//! Punning is the use of one IRI as more than one kind of ontology entity.
//! A policy is pure data: an enable flag plus a set of forbidden kind
//! pairs, stored normalized (smaller kind first) so lookups are symmetric.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::kind::OntKind;

/// Which kind pairs are mutually exclusive for one IRI within a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punnings {
    enabled: bool,
    forbidden: BTreeSet<(OntKind, OntKind)>,
}

impl Punnings {
    /// No restriction: any IRI may be any number of kinds simultaneously.
    pub fn full() -> Self {
        Punnings {
            enabled: false,
            forbidden: BTreeSet::new(),
        }
    }

    /// Weak restriction: class/datatype and object-property/data-property
    /// pairs are forbidden.
    pub fn weak() -> Self {
        Punnings {
            enabled: true,
            forbidden: BTreeSet::new(),
        }
        .with_pair(OntKind::Class, OntKind::Datatype)
        .with_pair(OntKind::ObjectProperty, OntKind::DataProperty)
    }

    /// Strict (OWL2 DL) restriction: weak plus annotation-property
    /// exclusions against object and data properties.
    pub fn strict() -> Self {
        Self::weak()
            .with_pair(OntKind::AnnotationProperty, OntKind::ObjectProperty)
            .with_pair(OntKind::AnnotationProperty, OntKind::DataProperty)
    }

    /// Forbid an additional kind pair. Pairs are stored symmetric.
    pub fn with_pair(mut self, a: OntKind, b: OntKind) -> Self {
        self.enabled = true;
        self.forbidden.insert(Self::norm(a, b));
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True when `a` and `b` may not share one IRI under this policy.
    pub fn forbids(&self, a: OntKind, b: OntKind) -> bool {
        self.enabled && self.forbidden.contains(&Self::norm(a, b))
    }

    /// All forbidden pairs, normalized.
    pub fn pairs(&self) -> impl Iterator<Item = (OntKind, OntKind)> + '_ {
        self.forbidden.iter().copied()
    }

    fn norm(a: OntKind, b: OntKind) -> (OntKind, OntKind) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}
