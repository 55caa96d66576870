//! Stock personality profiles.
//!
//! Four profiles ship with the crate, ordered from most to least
//! permissive: OWL2 Full, OWL2 DL, OWL1 Lite, and plain RDFS. They share
//! one binding table for the OWL kinds and differ in punning policy,
//! supported constructs, and strictness.

use std::sync::Arc;

use ontograph_core::Node;
use ontograph_vocab::{is_system_iri, owl, rdf, rdfs, xsd};

use crate::config::PersonalityConfig;
use crate::error::Result;
use crate::kind::OntKind;
use crate::punning::Punnings;
use crate::rdf_list;
use crate::registry::{EvalCtx, KindBinding, Personality, PersonalityBuilder, Reserved};

/// OWL2 Full: every construct, unrestricted punning, lax validation.
pub fn owl2_full() -> Arc<Personality> {
    owl_base("owl2-full")
        .set_punnings(Punnings::full())
        .set_config(PersonalityConfig::all_constructs())
        .build()
        .expect("profile definition is valid")
}

/// OWL2 DL: every construct, strict punning, strict validation.
pub fn owl2_dl() -> Arc<Personality> {
    owl_base("owl2-dl")
        .set_punnings(Punnings::strict())
        .set_config(PersonalityConfig::all_constructs().strict())
        .build()
        .expect("profile definition is valid")
}

/// OWL1 Lite: strict punning, no OWL2-only constructs, `owl:DataRange`
/// recognized alongside `rdfs:Datatype`.
pub fn owl1_lite() -> Arc<Personality> {
    owl_base("owl1-lite")
        .bind(
            OntKind::DataRange,
            KindBinding::structural(
                vec![Node::iri(rdfs::DATATYPE), Node::iri(owl::DATA_RANGE)],
                data_range_structure,
            ),
        )
        .set_punnings(Punnings::strict())
        .set_config(PersonalityConfig::new())
        .build()
        .expect("profile definition is valid")
}

/// Plain RDFS: classes, datatypes, generic properties, and individuals
/// typed by a recognized class. No OWL vocabulary, no punning limits.
pub fn rdfs() -> Arc<Personality> {
    PersonalityBuilder::new("rdfs")
        .bind(
            OntKind::Class,
            KindBinding::declared(vec![Node::iri(rdfs::CLASS)]),
        )
        .bind(
            OntKind::Datatype,
            KindBinding::declared(vec![Node::iri(rdfs::DATATYPE)]),
        )
        .bind(
            OntKind::Property,
            KindBinding::declared(vec![Node::iri(rdf::PROPERTY)]),
        )
        .bind(
            OntKind::NamedIndividual,
            KindBinding::structural(Vec::new(), rdfs_individual_structure),
        )
        .set_builtins(OntKind::Datatype, standard_datatypes())
        .set_reserved(Reserved::system())
        .set_punnings(Punnings::full())
        .set_config(PersonalityConfig::new())
        .build()
        .expect("profile definition is valid")
}

/// Shared OWL binding table, builtins, and reserved vocabulary.
fn owl_base(name: &str) -> PersonalityBuilder {
    PersonalityBuilder::new(name)
        .bind(
            OntKind::Ontology,
            KindBinding::declared(vec![Node::iri(owl::ONTOLOGY)]),
        )
        .bind(
            OntKind::Class,
            KindBinding::declared(vec![Node::iri(owl::CLASS)]),
        )
        .bind(
            OntKind::Datatype,
            KindBinding::declared(vec![Node::iri(rdfs::DATATYPE)]),
        )
        .bind(
            OntKind::ObjectProperty,
            KindBinding::declared(vec![Node::iri(owl::OBJECT_PROPERTY)]),
        )
        .bind(
            OntKind::DataProperty,
            KindBinding::declared(vec![Node::iri(owl::DATATYPE_PROPERTY)]),
        )
        .bind(
            OntKind::AnnotationProperty,
            KindBinding::declared(vec![Node::iri(owl::ANNOTATION_PROPERTY)]),
        )
        .bind(
            OntKind::Property,
            KindBinding::declared(vec![Node::iri(rdf::PROPERTY)]),
        )
        .bind(
            OntKind::NamedIndividual,
            KindBinding::structural(vec![Node::iri(owl::NAMED_INDIVIDUAL)], individual_structure),
        )
        .bind(
            OntKind::ClassExpression,
            KindBinding::structural(vec![Node::iri(owl::CLASS)], class_expression_structure),
        )
        .bind(
            OntKind::Restriction,
            KindBinding::structural(vec![Node::iri(owl::RESTRICTION)], restriction_structure),
        )
        .bind(
            OntKind::DataRange,
            KindBinding::structural(vec![Node::iri(rdfs::DATATYPE)], data_range_structure),
        )
        .set_builtins(
            OntKind::Class,
            [Node::iri(owl::THING), Node::iri(owl::NOTHING)],
        )
        .set_builtins(
            OntKind::ObjectProperty,
            [
                Node::iri(owl::TOP_OBJECT_PROPERTY),
                Node::iri(owl::BOTTOM_OBJECT_PROPERTY),
            ],
        )
        .set_builtins(
            OntKind::DataProperty,
            [
                Node::iri(owl::TOP_DATA_PROPERTY),
                Node::iri(owl::BOTTOM_DATA_PROPERTY),
            ],
        )
        .set_builtins(
            OntKind::AnnotationProperty,
            [
                Node::iri(rdfs::LABEL),
                Node::iri(rdfs::COMMENT),
                Node::iri(rdfs::SEE_ALSO),
                Node::iri(rdfs::IS_DEFINED_BY),
            ],
        )
        .set_builtins(OntKind::Datatype, standard_datatypes())
        .set_reserved(Reserved::system())
}

fn standard_datatypes() -> Vec<Node> {
    vec![
        Node::iri(xsd::STRING),
        Node::iri(xsd::BOOLEAN),
        Node::iri(xsd::INTEGER),
        Node::iri(xsd::NON_NEGATIVE_INTEGER),
        Node::iri(xsd::DECIMAL),
        Node::iri(xsd::FLOAT),
        Node::iri(xsd::DOUBLE),
        Node::iri(xsd::DATE_TIME),
        Node::iri(xsd::DATE),
        Node::iri(xsd::ANY_URI),
        Node::iri(rdf::LANG_STRING),
        Node::iri(rdfs::LITERAL),
    ]
}

/// A node shapes as a class expression when it carries a boolean operator,
/// an enumeration, restriction structure, or qualifies as a named class.
fn class_expression_structure(ctx: &EvalCtx<'_>, node: &Node) -> Result<bool> {
    let g = ctx.graph();
    if let Some(operand) = rdf_list::object(g, node, owl::COMPLEMENT_OF) {
        // The complement is a class expression iff its operand is one.
        return ctx.check(&operand, OntKind::ClassExpression);
    }
    if rdf_list::has(g, node, owl::INTERSECTION_OF)
        || rdf_list::has(g, node, owl::UNION_OF)
        || rdf_list::has(g, node, owl::ONE_OF)
    {
        return Ok(true);
    }
    if restriction_structure(ctx, node)? {
        return Ok(true);
    }
    ctx.check(node, OntKind::Class)
}

/// A node shapes as a restriction when it names a property and carries at
/// least one restricting facet.
fn restriction_structure(ctx: &EvalCtx<'_>, node: &Node) -> Result<bool> {
    let g = ctx.graph();
    if !rdf_list::has(g, node, owl::ON_PROPERTY) {
        return Ok(false);
    }
    Ok(rdf_list::has(g, node, owl::SOME_VALUES_FROM)
        || rdf_list::has(g, node, owl::ALL_VALUES_FROM)
        || rdf_list::has(g, node, owl::HAS_VALUE)
        || rdf_list::has(g, node, owl::CARDINALITY)
        || rdf_list::has(g, node, owl::MIN_CARDINALITY)
        || rdf_list::has(g, node, owl::MAX_CARDINALITY))
}

/// A node shapes as a data range when it enumerates literals.
fn data_range_structure(ctx: &EvalCtx<'_>, node: &Node) -> Result<bool> {
    let g = ctx.graph();
    match rdf_list::object(g, node, owl::ONE_OF) {
        Some(head) => {
            let elements = rdf_list::collect_list_elements(g, &head);
            Ok(!elements.is_empty() && elements.iter().all(Node::is_literal))
        }
        None => Ok(false),
    }
}

/// Lax profiles infer individuals from any `rdf:type` whose object is a
/// recognized class expression; strict profiles require the explicit
/// `owl:NamedIndividual` declaration.
fn individual_structure(ctx: &EvalCtx<'_>, node: &Node) -> Result<bool> {
    if ctx.personality().config().strict_mode {
        return Ok(false);
    }
    for ty in rdf_list::objects(ctx.graph(), node, rdf::TYPE) {
        if ty.as_iri().is_some_and(is_system_iri) {
            continue;
        }
        if ctx.check(&ty, OntKind::ClassExpression)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// RDFS variant: the type object is checked as a plain class.
fn rdfs_individual_structure(ctx: &EvalCtx<'_>, node: &Node) -> Result<bool> {
    for ty in rdf_list::objects(ctx.graph(), node, rdf::TYPE) {
        if ty.as_iri().is_some_and(is_system_iri) {
            continue;
        }
        if ctx.check(&ty, OntKind::Class)? {
            return Ok(true);
        }
    }
    Ok(false)
}
