//! Ontology models: a union graph paired with a personality.
//!
//! An `OntModel` is the construction entry point callers use instead of
//! assembling the pieces by hand: it wraps a base graph (reasoner-bound
//! when one is given) in a [`UnionGraph`], carries the personality that
//! interprets its nodes, and keeps `owl:imports` assertions in step with
//! the union's subgraph structure.

use std::sync::Arc;

use tracing::debug;

use ontograph_core::{make_ont_union, ont_header, GraphRef, Node, Triple, UnionGraph};
use ontograph_personality::{OntKind, OntObject, Personality};
use ontograph_vocab::owl;

use crate::error::Result;
use crate::reasoner::Reasoner;

/// A composed ontology model.
pub struct OntModel {
    union: Arc<UnionGraph>,
    personality: Arc<Personality>,
}

impl OntModel {
    /// Build a model over `base` under `personality`.
    ///
    /// When a reasoner is given, its bound graph becomes the union's base;
    /// imports added later sit beside it as subgraphs and are visible to
    /// every query through the union.
    pub fn create(
        base: GraphRef,
        personality: Arc<Personality>,
        reasoner: Option<&dyn Reasoner>,
    ) -> Result<OntModel> {
        let bound = match reasoner {
            Some(r) => r.bind(base)?,
            None => base,
        };
        debug!(personality = personality.name(), "creating ontology model");
        Ok(OntModel {
            union: UnionGraph::new(bound),
            personality,
        })
    }

    /// The model's union graph.
    pub fn union(&self) -> &Arc<UnionGraph> {
        &self.union
    }

    /// The union as a shareable graph handle.
    pub fn graph(&self) -> GraphRef {
        self.union.as_graph()
    }

    pub fn personality(&self) -> &Arc<Personality> {
        &self.personality
    }

    /// Whether `node` qualifies as `kind` against the whole model.
    pub fn can_view(&self, node: &Node, kind: OntKind) -> Result<bool> {
        Ok(self.personality.can_view(&self.graph(), node, kind)?)
    }

    /// Project `node` as `kind` against the whole model.
    pub fn view(&self, node: &Node, kind: OntKind) -> Result<OntObject> {
        Ok(self.personality.view(&self.graph(), node, kind)?)
    }

    /// Attach `graph` as an imported subgraph.
    ///
    /// When both this model's base and the import declare ontology headers,
    /// the matching `owl:imports` triple is asserted in the base so the
    /// document structure mirrors the composition.
    pub fn add_import(&self, graph: GraphRef) -> Result<()> {
        if let Some(triple) = self.import_triple(&graph) {
            self.union.base().add(triple)?;
        }
        self.union.add_sub_graph(graph)?;
        Ok(())
    }

    /// Detach an imported subgraph and retract its `owl:imports` triple.
    pub fn remove_import(&self, graph: &GraphRef) -> Result<()> {
        self.union.remove_sub_graph(graph)?;
        if let Some(triple) = self.import_triple(graph) {
            self.union.base().delete(&triple)?;
        }
        Ok(())
    }

    /// The directly imported subgraphs.
    pub fn imports(&self) -> Vec<GraphRef> {
        self.union.sub_graphs()
    }

    /// Rebuild this model's composition from its base's import closure.
    ///
    /// Delegates to [`make_ont_union`] over `candidates`; the result is a
    /// fresh model sharing this one's base and personality, with subgraphs
    /// arranged per the declared `owl:imports` tree.
    pub fn assemble_imports(&self, candidates: &[GraphRef]) -> Result<OntModel> {
        let union = make_ont_union(&self.union.base(), candidates, UnionGraph::new)?;
        Ok(OntModel {
            union,
            personality: self.personality.clone(),
        })
    }

    fn import_triple(&self, graph: &GraphRef) -> Option<Triple> {
        let base_header = ont_header(&self.union.base())?;
        let import_iri = ont_header(graph)?.iri?;
        Some(Triple::new(
            base_header.id,
            Node::iri(owl::IMPORTS),
            Node::iri(import_iri),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reasoner::NullReasoner;
    use ontograph_core::{MemoryGraph, ReadOnlyGraph, TriplePattern};
    use ontograph_personality::profiles;
    use ontograph_vocab::rdf;

    fn ontology_graph(iri: &str) -> GraphRef {
        let g: GraphRef = MemoryGraph::new();
        g.add(Triple::new(
            Node::iri(iri),
            Node::iri(rdf::TYPE),
            Node::iri(owl::ONTOLOGY),
        ))
        .unwrap();
        g
    }

    fn class_triple(iri: &str) -> Triple {
        Triple::new(Node::iri(iri), Node::iri(rdf::TYPE), Node::iri(owl::CLASS))
    }

    #[test]
    fn test_create_and_view_through_model() {
        let base = ontology_graph("http://e.org/ont/a");
        base.add(class_triple("http://e.org/Pizza")).unwrap();

        let model =
            OntModel::create(base, profiles::owl2_full(), Some(&NullReasoner)).unwrap();
        assert!(model
            .can_view(&Node::iri("http://e.org/Pizza"), OntKind::Class)
            .unwrap());
        let view = model
            .view(&Node::iri("http://e.org/Pizza"), OntKind::Class)
            .unwrap();
        assert_eq!(view.kind(), OntKind::Class);
    }

    #[test]
    fn test_add_import_makes_triples_visible_and_asserts_header() {
        let base = ontology_graph("http://e.org/ont/a");
        let imported = ontology_graph("http://e.org/ont/b");
        imported.add(class_triple("http://e.org/Topping")).unwrap();

        let model = OntModel::create(base, profiles::owl2_full(), None).unwrap();
        assert!(!model
            .can_view(&Node::iri("http://e.org/Topping"), OntKind::Class)
            .unwrap());

        model.add_import(imported.clone()).unwrap();
        assert_eq!(model.imports().len(), 1);
        assert!(model
            .can_view(&Node::iri("http://e.org/Topping"), OntKind::Class)
            .unwrap());
        assert!(model.union().base().contains(&Triple::new(
            Node::iri("http://e.org/ont/a"),
            Node::iri(owl::IMPORTS),
            Node::iri("http://e.org/ont/b"),
        )));

        model.remove_import(&imported).unwrap();
        assert!(model.imports().is_empty());
        assert!(!model
            .can_view(&Node::iri("http://e.org/Topping"), OntKind::Class)
            .unwrap());
        assert!(!model.union().base().contains(&Triple::new(
            Node::iri("http://e.org/ont/a"),
            Node::iri(owl::IMPORTS),
            Node::iri("http://e.org/ont/b"),
        )));
    }

    #[test]
    fn test_reasoner_bound_base() {
        struct FreezingReasoner;
        impl Reasoner for FreezingReasoner {
            fn bind(&self, graph: GraphRef) -> Result<GraphRef> {
                Ok(ReadOnlyGraph::wrap(graph))
            }
        }

        let base = ontology_graph("http://e.org/ont/a");
        let model =
            OntModel::create(base, profiles::owl2_full(), Some(&FreezingReasoner)).unwrap();
        // Mutation now fails at the bound base.
        let err = model
            .union()
            .base()
            .add(class_triple("http://e.org/Pizza"))
            .unwrap_err();
        assert!(matches!(err, ontograph_core::Error::ReadOnlyGraph(_)));
    }

    #[test]
    fn test_assemble_imports_follows_declared_closure() {
        let a = ontology_graph("http://e.org/ont/a");
        a.add(Triple::new(
            Node::iri("http://e.org/ont/a"),
            Node::iri(owl::IMPORTS),
            Node::iri("http://e.org/ont/b"),
        ))
        .unwrap();
        let b = ontology_graph("http://e.org/ont/b");
        b.add(class_triple("http://e.org/FromB")).unwrap();
        let unrelated = ontology_graph("http://e.org/ont/z");

        let model = OntModel::create(a, profiles::owl2_full(), None).unwrap();
        let assembled = model
            .assemble_imports(&[b.clone(), unrelated])
            .unwrap();

        assert_eq!(assembled.imports().len(), 1);
        assert!(assembled
            .can_view(&Node::iri("http://e.org/FromB"), OntKind::Class)
            .unwrap());
        // The assembled model shares this model's base.
        assert!(ontograph_core::same_graph(
            &model.union().base(),
            &assembled.union().base()
        ));
        assert_eq!(
            assembled
                .graph()
                .find(&TriplePattern::ANY.with_p(Node::iri(owl::IMPORTS)))
                .count(),
            1
        );
    }
}
