//! Ontology-object kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use ontograph_core::Node;
use ontograph_vocab::{owl, rdf, rdfs};

/// The kinds of ontology object a node can be viewed as.
///
/// Declaration order doubles as the punning precedence order: when two
/// mutually exclusive declarations are both asserted for one IRI, the kind
/// declared *earlier* in this enum qualifies and the later one is rejected.
/// This keeps conflict resolution deterministic and independent of triple
/// insertion order (the original system resolved such conflicts in
/// declaration-encounter order, which was unspecified).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OntKind {
    /// Ontology header node
    Ontology,
    /// Named class
    Class,
    /// Named datatype
    Datatype,
    /// Object (individual-valued) property
    ObjectProperty,
    /// Data (literal-valued) property
    DataProperty,
    /// Annotation property
    AnnotationProperty,
    /// Generic RDF property (RDFS-level profiles)
    Property,
    /// Named individual
    NamedIndividual,
    /// Class expression: named class or anonymous boolean/enumeration form
    ClassExpression,
    /// Property restriction
    Restriction,
    /// Data range: named datatype or literal enumeration
    DataRange,
}

impl OntKind {
    /// All kinds, in punning precedence order.
    pub const ALL: [OntKind; 11] = [
        OntKind::Ontology,
        OntKind::Class,
        OntKind::Datatype,
        OntKind::ObjectProperty,
        OntKind::DataProperty,
        OntKind::AnnotationProperty,
        OntKind::Property,
        OntKind::NamedIndividual,
        OntKind::ClassExpression,
        OntKind::Restriction,
        OntKind::DataRange,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            OntKind::Ontology => "Ontology",
            OntKind::Class => "Class",
            OntKind::Datatype => "Datatype",
            OntKind::ObjectProperty => "ObjectProperty",
            OntKind::DataProperty => "DataProperty",
            OntKind::AnnotationProperty => "AnnotationProperty",
            OntKind::Property => "Property",
            OntKind::NamedIndividual => "NamedIndividual",
            OntKind::ClassExpression => "ClassExpression",
            OntKind::Restriction => "Restriction",
            OntKind::DataRange => "DataRange",
        }
    }

    /// The `rdf:type` objects conventionally recognized for this kind under
    /// OWL2. Profiles start from these and may narrow or extend them.
    pub fn default_declaration_types(&self) -> Vec<Node> {
        match self {
            OntKind::Ontology => vec![Node::iri(owl::ONTOLOGY)],
            OntKind::Class => vec![Node::iri(owl::CLASS)],
            OntKind::Datatype => vec![Node::iri(rdfs::DATATYPE)],
            OntKind::ObjectProperty => vec![Node::iri(owl::OBJECT_PROPERTY)],
            OntKind::DataProperty => vec![Node::iri(owl::DATATYPE_PROPERTY)],
            OntKind::AnnotationProperty => vec![Node::iri(owl::ANNOTATION_PROPERTY)],
            OntKind::Property => vec![Node::iri(rdf::PROPERTY)],
            OntKind::NamedIndividual => vec![Node::iri(owl::NAMED_INDIVIDUAL)],
            OntKind::ClassExpression => vec![Node::iri(owl::CLASS)],
            OntKind::Restriction => vec![Node::iri(owl::RESTRICTION)],
            OntKind::DataRange => vec![Node::iri(rdfs::DATATYPE), Node::iri(owl::DATA_RANGE)],
        }
    }
}

impl fmt::Display for OntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
