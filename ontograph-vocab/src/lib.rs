//! RDF Vocabulary Constants for ontograph
//!
//! This crate provides a centralized location for the RDF vocabulary IRIs,
//! namespace strings, and reserved-term tables used throughout the
//! ontograph ecosystem.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `owl` - OWL vocabulary (http://www.w3.org/2002/07/owl#)
//! - `ns` - namespace strings and the standard prefix table

/// RDF vocabulary constants
pub mod rdf {
    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:Property IRI
    pub const PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// rdf:first IRI (RDF list head)
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";

    /// rdf:rest IRI (RDF list tail)
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";

    /// rdf:nil IRI (RDF list terminator)
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

    /// rdf:List IRI
    pub const LIST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#List";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs:Resource IRI
    pub const RESOURCE: &str = "http://www.w3.org/2000/01/rdf-schema#Resource";

    /// rdfs:Class IRI
    pub const CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";

    /// rdfs:Datatype IRI
    pub const DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";

    /// rdfs:Literal IRI
    pub const LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";

    /// rdfs:subClassOf IRI
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// rdfs:subPropertyOf IRI
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";

    /// rdfs:domain IRI
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";

    /// rdfs:range IRI
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

    /// rdfs:seeAlso IRI
    pub const SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";

    /// rdfs:isDefinedBy IRI
    pub const IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
}

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:nonNegativeInteger IRI
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:anyURI IRI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// OWL vocabulary constants
pub mod owl {
    /// owl:Ontology IRI
    pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";

    /// owl:imports IRI
    pub const IMPORTS: &str = "http://www.w3.org/2002/07/owl#imports";

    /// owl:versionIRI IRI
    pub const VERSION_IRI: &str = "http://www.w3.org/2002/07/owl#versionIRI";

    /// owl:Class IRI
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";

    /// owl:Restriction IRI
    pub const RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";

    /// owl:ObjectProperty IRI
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";

    /// owl:DatatypeProperty IRI
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";

    /// owl:AnnotationProperty IRI
    pub const ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";

    /// owl:NamedIndividual IRI
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";

    /// owl:Thing IRI
    pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";

    /// owl:Nothing IRI
    pub const NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";

    /// owl:topObjectProperty IRI
    pub const TOP_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topObjectProperty";

    /// owl:bottomObjectProperty IRI
    pub const BOTTOM_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomObjectProperty";

    /// owl:topDataProperty IRI
    pub const TOP_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topDataProperty";

    /// owl:bottomDataProperty IRI
    pub const BOTTOM_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomDataProperty";

    /// owl:onProperty IRI
    pub const ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";

    /// owl:someValuesFrom IRI
    pub const SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";

    /// owl:allValuesFrom IRI
    pub const ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";

    /// owl:hasValue IRI
    pub const HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";

    /// owl:cardinality IRI
    pub const CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";

    /// owl:minCardinality IRI
    pub const MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";

    /// owl:maxCardinality IRI
    pub const MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";

    /// owl:complementOf IRI
    pub const COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#complementOf";

    /// owl:intersectionOf IRI
    pub const INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";

    /// owl:unionOf IRI
    pub const UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";

    /// owl:oneOf IRI
    pub const ONE_OF: &str = "http://www.w3.org/2002/07/owl#oneOf";

    /// owl:disjointWith IRI
    pub const DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";

    /// owl:disjointUnionOf IRI
    pub const DISJOINT_UNION_OF: &str = "http://www.w3.org/2002/07/owl#disjointUnionOf";

    /// owl:equivalentClass IRI
    pub const EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";

    /// owl:equivalentProperty IRI
    pub const EQUIVALENT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#equivalentProperty";

    /// owl:inverseOf IRI
    pub const INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";

    /// owl:sameAs IRI
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";

    /// owl:differentFrom IRI
    pub const DIFFERENT_FROM: &str = "http://www.w3.org/2002/07/owl#differentFrom";

    /// owl:hasKey IRI
    pub const HAS_KEY: &str = "http://www.w3.org/2002/07/owl#hasKey";

    /// owl:propertyChainAxiom IRI
    pub const PROPERTY_CHAIN_AXIOM: &str = "http://www.w3.org/2002/07/owl#propertyChainAxiom";

    /// owl:DataRange IRI (OWL 1 vocabulary, retained for OWL 1 profiles)
    pub const DATA_RANGE: &str = "http://www.w3.org/2002/07/owl#DataRange";
}

/// Namespace strings and the standard prefix table
pub mod ns {
    /// RDF namespace
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// RDFS namespace
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// XSD namespace
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// OWL namespace
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

    /// Standard prefix table: (prefix, namespace) pairs
    pub const STANDARD_PREFIXES: &[(&str, &str)] = &[
        ("rdf", RDF),
        ("rdfs", RDFS),
        ("xsd", XSD),
        ("owl", OWL),
    ];
}

/// True if `iri` falls inside one of the system namespaces (rdf, rdfs, xsd,
/// owl). Terms in these namespaces are reserved: they may not be redefined
/// as user entities unless a personality explicitly lists them as builtins.
pub fn is_system_iri(iri: &str) -> bool {
    iri.starts_with(ns::RDF)
        || iri.starts_with(ns::RDFS)
        || iri.starts_with(ns::XSD)
        || iri.starts_with(ns::OWL)
}
