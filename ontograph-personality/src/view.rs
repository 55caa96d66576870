//! Typed projections over graph nodes.
//!
//! An [`OntObject`] is a node that passed kind resolution, bundled with the
//! graph it was resolved against and the personality that admitted it. The
//! typed wrappers ([`OntClass`], [`OntProperty`], [`OntIndividual`]) add
//! kind-specific accessors; all of them read and write through the
//! underlying graph, so a projection is always a live view, never a copy.

use std::sync::Arc;

use ontograph_core::{GraphRef, Node, Triple, TriplePattern};
use ontograph_vocab::{owl, rdf, rdfs, xsd};

use crate::config::Construct;
use crate::error::{Error, Result};
use crate::kind::OntKind;
use crate::rdf_list;
use crate::registry::Personality;

/// A node viewed as a particular ontology-object kind.
#[derive(Clone)]
pub struct OntObject {
    node: Node,
    graph: GraphRef,
    kind: OntKind,
    personality: Arc<Personality>,
}

impl OntObject {
    pub(crate) fn new(
        node: Node,
        graph: GraphRef,
        kind: OntKind,
        personality: Arc<Personality>,
    ) -> Self {
        OntObject {
            node,
            graph,
            kind,
            personality,
        }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn kind(&self) -> OntKind {
        self.kind
    }

    pub fn graph(&self) -> &GraphRef {
        &self.graph
    }

    pub fn personality(&self) -> &Arc<Personality> {
        &self.personality
    }

    /// Objects of `(self, predicate, ?)` in the backing graph.
    pub fn objects_of(&self, predicate: &str) -> Vec<Node> {
        rdf_list::objects(&self.graph, &self.node, predicate)
    }

    /// Subjects of `(?, predicate, self)` in the backing graph.
    pub fn subjects_of(&self, predicate: &str) -> Vec<Node> {
        self.graph
            .find(
                &TriplePattern::ANY
                    .with_p(Node::iri(predicate))
                    .with_o(self.node.clone()),
            )
            .map(|t| t.s)
            .collect()
    }

    /// Assert `(self, predicate, object)`.
    pub fn add_assertion(&self, predicate: &str, object: Node) -> Result<()> {
        self.graph
            .add(Triple::new(self.node.clone(), Node::iri(predicate), object))?;
        Ok(())
    }

    /// Retract `(self, predicate, object)`.
    pub fn remove_assertion(&self, predicate: &str, object: &Node) -> Result<()> {
        self.graph.delete(&Triple::new(
            self.node.clone(),
            Node::iri(predicate),
            object.clone(),
        ))?;
        Ok(())
    }

    /// First `rdfs:label` literal, if any.
    pub fn label(&self) -> Option<String> {
        self.objects_of(rdfs::LABEL)
            .into_iter()
            .find_map(|n| n.as_literal().map(|l| l.lexical.to_string()))
    }

    /// First `rdfs:comment` literal, if any.
    pub fn comment(&self) -> Option<String> {
        self.objects_of(rdfs::COMMENT)
            .into_iter()
            .find_map(|n| n.as_literal().map(|l| l.lexical.to_string()))
    }

    /// Re-project as a class view. Fails unless this object resolved as a
    /// class or class expression.
    pub fn into_class(self) -> Result<OntClass> {
        match self.kind {
            OntKind::Class | OntKind::ClassExpression | OntKind::Restriction => {
                Ok(OntClass(self))
            }
            _ => Err(Error::cannot_view_as(
                &self.node,
                OntKind::Class,
                self.personality.name(),
            )),
        }
    }

    /// Re-project as a property view.
    pub fn into_property(self) -> Result<OntProperty> {
        match self.kind {
            OntKind::ObjectProperty
            | OntKind::DataProperty
            | OntKind::AnnotationProperty
            | OntKind::Property => Ok(OntProperty(self)),
            _ => Err(Error::cannot_view_as(
                &self.node,
                OntKind::Property,
                self.personality.name(),
            )),
        }
    }

    /// Re-project as an individual view.
    pub fn into_individual(self) -> Result<OntIndividual> {
        match self.kind {
            OntKind::NamedIndividual => Ok(OntIndividual(self)),
            _ => Err(Error::cannot_view_as(
                &self.node,
                OntKind::NamedIndividual,
                self.personality.name(),
            )),
        }
    }
}

/// Class view: subclass axioms and OWL2 disjoint unions.
pub struct OntClass(OntObject);

impl OntClass {
    pub fn object(&self) -> &OntObject {
        &self.0
    }

    /// Directly asserted superclasses.
    pub fn super_classes(&self) -> Vec<Node> {
        self.0.objects_of(rdfs::SUB_CLASS_OF)
    }

    /// Classes directly asserted to specialize this one.
    pub fn sub_classes(&self) -> Vec<Node> {
        self.0.subjects_of(rdfs::SUB_CLASS_OF)
    }

    pub fn add_super_class(&self, class: Node) -> Result<()> {
        self.0.add_assertion(rdfs::SUB_CLASS_OF, class)
    }

    pub fn remove_super_class(&self, class: &Node) -> Result<()> {
        self.0.remove_assertion(rdfs::SUB_CLASS_OF, class)
    }

    /// Classes directly asserted equivalent to this one.
    pub fn equivalent_classes(&self) -> Vec<Node> {
        self.0.objects_of(owl::EQUIVALENT_CLASS)
    }

    /// Members of this class's `owl:disjointUnionOf` axioms.
    ///
    /// Gated on [`Construct::DisjointUnion`]: profiles that predate the
    /// construct reject the query rather than silently returning nothing.
    pub fn disjoint_union_of(&self) -> Result<Vec<Vec<Node>>> {
        let personality = self.0.personality();
        if !personality.config().supports(Construct::DisjointUnion) {
            return Err(Error::unsupported(
                Construct::DisjointUnion.label(),
                personality.name(),
            ));
        }
        Ok(self
            .0
            .objects_of(owl::DISJOINT_UNION_OF)
            .iter()
            .map(|head| rdf_list::collect_list_elements(self.0.graph(), head))
            .collect())
    }

    /// Assert an `owl:disjointUnionOf` axiom over `members`.
    pub fn add_disjoint_union_of(&self, members: &[Node]) -> Result<()> {
        let personality = self.0.personality();
        if !personality.config().supports(Construct::DisjointUnion) {
            return Err(Error::unsupported(
                Construct::DisjointUnion.label(),
                personality.name(),
            ));
        }
        let head = rdf_list::build_list(self.0.graph(), members)?;
        self.0.add_assertion(owl::DISJOINT_UNION_OF, head)
    }
}

/// Property view: domain and range axioms.
pub struct OntProperty(OntObject);

impl OntProperty {
    pub fn object(&self) -> &OntObject {
        &self.0
    }

    pub fn domains(&self) -> Vec<Node> {
        self.0.objects_of(rdfs::DOMAIN)
    }

    pub fn ranges(&self) -> Vec<Node> {
        self.0.objects_of(rdfs::RANGE)
    }

    pub fn add_domain(&self, class: Node) -> Result<()> {
        self.0.add_assertion(rdfs::DOMAIN, class)
    }

    pub fn add_range(&self, range: Node) -> Result<()> {
        self.0.add_assertion(rdfs::RANGE, range)
    }

    /// Directly asserted superproperties.
    pub fn super_properties(&self) -> Vec<Node> {
        self.0.objects_of(rdfs::SUB_PROPERTY_OF)
    }
}

/// Individual view: class membership.
pub struct OntIndividual(OntObject);

impl OntIndividual {
    pub fn object(&self) -> &OntObject {
        &self.0
    }

    /// Directly asserted classes, with `owl:NamedIndividual` filtered out.
    pub fn classes(&self) -> Vec<Node> {
        self.0
            .objects_of(rdf::TYPE)
            .into_iter()
            .filter(|n| n.as_iri() != Some(owl::NAMED_INDIVIDUAL))
            .collect()
    }

    pub fn add_class(&self, class: Node) -> Result<()> {
        self.0.add_assertion(rdf::TYPE, class)
    }
}

/// Create an anonymous exact-cardinality restriction on `property`.
///
/// Returns the restriction's blank node. Negative cardinalities are
/// rejected before anything is written.
pub fn create_cardinality_restriction(
    graph: &GraphRef,
    property: &Node,
    cardinality: i64,
) -> Result<Node> {
    if cardinality < 0 {
        return Err(Error::invalid_argument(format!(
            "cardinality must be non-negative, got {}",
            cardinality
        )));
    }
    let node = Node::blank();
    graph.add(Triple::new(
        node.clone(),
        Node::iri(rdf::TYPE),
        Node::iri(owl::RESTRICTION),
    ))?;
    graph.add(Triple::new(
        node.clone(),
        Node::iri(owl::ON_PROPERTY),
        property.clone(),
    ))?;
    graph.add(Triple::new(
        node.clone(),
        Node::iri(owl::CARDINALITY),
        Node::typed_literal(cardinality.to_string(), xsd::NON_NEGATIVE_INTEGER),
    ))?;
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontograph_core::MemoryGraph;

    #[test]
    fn test_cardinality_restriction_rejects_negative() {
        let g: GraphRef = MemoryGraph::new();
        let prop = Node::iri("http://e.org/hasPart");
        let err = create_cardinality_restriction(&g, &prop, -1).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        // Nothing was written.
        assert_eq!(g.size().unwrap(), 0);
    }

    #[test]
    fn test_cardinality_restriction_shape() {
        let g: GraphRef = MemoryGraph::new();
        let prop = Node::iri("http://e.org/hasPart");
        let node = create_cardinality_restriction(&g, &prop, 2).unwrap();
        assert!(node.is_blank());
        assert!(g.contains(&Triple::new(
            node.clone(),
            Node::iri(rdf::TYPE),
            Node::iri(owl::RESTRICTION),
        )));
        assert!(g.contains(&Triple::new(
            node.clone(),
            Node::iri(owl::ON_PROPERTY),
            prop,
        )));
        assert_eq!(g.size().unwrap(), 3);
    }
}
