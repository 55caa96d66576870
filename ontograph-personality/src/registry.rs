//! Personality registry and type-resolution evaluation.
//!
//! A [`Personality`] decides which [`OntKind`] projections a node qualifies
//! for against a given graph. Evaluation runs a fixed pipeline per
//! `(node, kind)` query:
//!
//! 1. unbound kind: the personality does not support it at all;
//! 2. builtin: the node is a well-known entity of the kind (e.g.
//!    `owl:Thing` as a class) and qualifies without any graph evidence;
//! 3. reserved: system-vocabulary nodes that are not builtins never
//!    qualify as user entities;
//! 4. declaration or structure: the graph either declares the node
//!    (`rdf:type` one of the kind's recognized types) or the kind's
//!    structural eligibility function recognizes its shape;
//! 5. punning conflict: under a restricting punning policy, a conflicting
//!    declaration for a kind of higher precedence disqualifies this one.
//!
//! # Invariants
//!
//! - Evaluation never diverges: self-referential structures surface as
//!   [`Error::RecursionDetected`] via the per-query stack in [`EvalCtx`].
//! - Punning conflicts resolve deterministically by [`OntKind`] precedence
//!   order; triple insertion order is irrelevant.
//! - A built personality is immutable; all sharing is by `Arc`.

use std::collections::{HashMap, HashSet};
use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use ontograph_core::{GraphRef, Node, Triple};
use ontograph_vocab::{is_system_iri, rdf};

use crate::config::PersonalityConfig;
use crate::error::{Error, Result};
use crate::kind::OntKind;
use crate::punning::Punnings;
use crate::view::OntObject;

/// Structural eligibility check for one kind.
///
/// Called when a node lacks an explicit declaration; inspects the node's
/// surroundings in `ctx`'s graph. Nested kind queries must go through
/// [`EvalCtx::check`] so the recursion guard sees them.
pub type EligibilityFn = fn(&EvalCtx<'_>, &Node) -> Result<bool>;

/// Eligibility function for kinds with no structural fallback: only
/// builtins and explicit declarations qualify.
pub fn no_structure(_ctx: &EvalCtx<'_>, _node: &Node) -> Result<bool> {
    Ok(false)
}

/// How one kind is recognized: its declaration types plus a structural
/// fallback.
#[derive(Clone)]
pub struct KindBinding {
    /// `rdf:type` objects that declare this kind.
    pub recognized_types: Vec<Node>,
    /// Structural fallback for undeclared nodes.
    pub eligibility: EligibilityFn,
}

impl KindBinding {
    /// Binding recognized by declaration only.
    pub fn declared(recognized_types: Vec<Node>) -> Self {
        KindBinding {
            recognized_types,
            eligibility: no_structure,
        }
    }

    /// Binding with a structural fallback.
    pub fn structural(recognized_types: Vec<Node>, eligibility: EligibilityFn) -> Self {
        KindBinding {
            recognized_types,
            eligibility,
        }
    }
}

/// Nodes that never qualify as user-defined entities.
#[derive(Debug, Clone, Default)]
pub struct Reserved {
    /// Explicitly reserved nodes beyond the namespace rule.
    pub explicit: HashSet<Node>,
    /// Reserve every IRI in the rdf/rdfs/xsd/owl namespaces.
    pub system_namespaces: bool,
}

impl Reserved {
    /// Reserve the system namespaces, nothing else.
    pub fn system() -> Self {
        Reserved {
            explicit: HashSet::new(),
            system_namespaces: true,
        }
    }

    fn contains(&self, node: &Node) -> bool {
        if self.explicit.contains(node) {
            return true;
        }
        match node.as_iri() {
            Some(iri) => self.system_namespaces && is_system_iri(iri),
            None => false,
        }
    }
}

/// An immutable kind-resolution policy: bindings, builtins, reserved
/// vocabulary, punning rules, and configuration.
///
/// Build one with [`PersonalityBuilder`] or take a stock profile from
/// [`profiles`](crate::profiles).
pub struct Personality {
    name: String,
    bindings: HashMap<OntKind, KindBinding>,
    builtins: HashMap<OntKind, HashSet<Node>>,
    reserved: Reserved,
    punnings: Punnings,
    config: PersonalityConfig,
}

impl Personality {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn punnings(&self) -> &Punnings {
        &self.punnings
    }

    pub fn config(&self) -> &PersonalityConfig {
        &self.config
    }

    /// Kinds this personality can resolve.
    pub fn kinds(&self) -> impl Iterator<Item = OntKind> + '_ {
        OntKind::ALL
            .into_iter()
            .filter(|k| self.bindings.contains_key(k))
    }

    pub fn is_builtin(&self, node: &Node, kind: OntKind) -> bool {
        self.builtins.get(&kind).is_some_and(|set| set.contains(node))
    }

    pub fn is_reserved(&self, node: &Node) -> bool {
        self.reserved.contains(node)
    }

    /// Whether `node` qualifies as `kind` against `graph`.
    ///
    /// `Ok(false)` means the node does not qualify; `Err` means the query
    /// itself failed (unbound kind, divergent structure).
    pub fn can_view(&self, graph: &GraphRef, node: &Node, kind: OntKind) -> Result<bool> {
        let ctx = EvalCtx::new(self, graph);
        ctx.check(node, kind)
    }

    /// Resolve `node` as `kind` and wrap it as an [`OntObject`].
    pub fn view(
        self: &Arc<Self>,
        graph: &GraphRef,
        node: &Node,
        kind: OntKind,
    ) -> Result<OntObject> {
        if self.can_view(graph, node, kind)? {
            Ok(OntObject::new(node.clone(), graph.clone(), kind, self.clone()))
        } else {
            Err(Error::cannot_view_as(node, kind, &self.name))
        }
    }

    /// All bound kinds `node` qualifies for, in precedence order.
    ///
    /// Recursion errors on individual kinds are treated as non-matches;
    /// other errors propagate.
    pub fn kinds_of(&self, graph: &GraphRef, node: &Node) -> Result<Vec<OntKind>> {
        let mut out = Vec::new();
        for kind in self.kinds() {
            match self.can_view(graph, node, kind) {
                Ok(true) => out.push(kind),
                Ok(false) | Err(Error::RecursionDetected { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }

    fn eval(&self, ctx: &EvalCtx<'_>, node: &Node, kind: OntKind) -> Result<bool> {
        let binding = self
            .bindings
            .get(&kind)
            .ok_or_else(|| Error::unsupported(kind.label(), &self.name))?;

        if self.is_builtin(node, kind) {
            return Ok(true);
        }
        if self.is_reserved(node) {
            return Ok(false);
        }

        let qualified = ctx.declared(node, kind) || (binding.eligibility)(ctx, node)?;
        if !qualified {
            return Ok(false);
        }

        if self.punnings.is_enabled() {
            // Earlier kinds take precedence: a conflicting declaration of
            // a preceding kind disqualifies this one, never the reverse.
            for other in OntKind::ALL {
                if other == kind {
                    break;
                }
                if self.punnings.forbids(kind, other)
                    && self.bindings.contains_key(&other)
                    && ctx.declared(node, other)
                {
                    trace!(%node, %kind, conflicting = %other, "punning conflict");
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}

impl fmt::Debug for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Personality")
            .field("name", &self.name)
            .field("kinds", &self.kinds().collect::<Vec<_>>())
            .finish()
    }
}

/// Per-query evaluation context: the personality, the graph under
/// inspection, and the recursion stack.
pub struct EvalCtx<'a> {
    personality: &'a Personality,
    graph: &'a GraphRef,
    stack: RefCell<Vec<(Node, OntKind)>>,
}

impl<'a> EvalCtx<'a> {
    fn new(personality: &'a Personality, graph: &'a GraphRef) -> Self {
        EvalCtx {
            personality,
            graph,
            stack: RefCell::new(Vec::new()),
        }
    }

    pub fn graph(&self) -> &GraphRef {
        self.graph
    }

    pub fn personality(&self) -> &Personality {
        self.personality
    }

    /// Recursion-guarded kind query. Eligibility functions use this for
    /// nested checks; re-entering an in-flight `(node, kind)` pair fails
    /// with [`Error::RecursionDetected`].
    pub fn check(&self, node: &Node, kind: OntKind) -> Result<bool> {
        if self
            .stack
            .borrow()
            .iter()
            .any(|(n, k)| n == node && *k == kind)
        {
            return Err(Error::recursion(node, kind));
        }
        self.stack.borrow_mut().push((node.clone(), kind));
        let result = self.personality.eval(self, node, kind);
        self.stack.borrow_mut().pop();
        result
    }

    /// True when the graph declares `node` via `rdf:type` against one of
    /// the kind's recognized types.
    pub fn declared(&self, node: &Node, kind: OntKind) -> bool {
        let Some(binding) = self.personality.bindings.get(&kind) else {
            return false;
        };
        binding.recognized_types.iter().any(|ty| {
            self.graph
                .contains(&Triple::new(node.clone(), Node::iri(rdf::TYPE), ty.clone()))
        })
    }
}

/// Builder for [`Personality`]. Validates on [`build`](Self::build).
#[derive(Default)]
pub struct PersonalityBuilder {
    name: Option<String>,
    bindings: HashMap<OntKind, KindBinding>,
    builtins: HashMap<OntKind, HashSet<Node>>,
    reserved: Reserved,
    punnings: Option<Punnings>,
    config: PersonalityConfig,
}

impl PersonalityBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        PersonalityBuilder {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Bind a kind. Rebinding replaces the previous binding.
    pub fn bind(mut self, kind: OntKind, binding: KindBinding) -> Self {
        self.bindings.insert(kind, binding);
        self
    }

    /// Declare builtins for a kind (merged with any earlier call).
    pub fn set_builtins(mut self, kind: OntKind, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.builtins.entry(kind).or_default().extend(nodes);
        self
    }

    pub fn set_reserved(mut self, reserved: Reserved) -> Self {
        self.reserved = reserved;
        self
    }

    pub fn set_punnings(mut self, punnings: Punnings) -> Self {
        self.punnings = Some(punnings);
        self
    }

    pub fn set_config(mut self, config: PersonalityConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate and freeze the personality.
    pub fn build(self) -> Result<Arc<Personality>> {
        let name = match self.name {
            Some(n) if !n.is_empty() => n,
            _ => return Err(Error::builder("personality name is required")),
        };
        if self.bindings.is_empty() {
            return Err(Error::builder(format!(
                "personality '{}' binds no kinds",
                name
            )));
        }
        let punnings = self.punnings.unwrap_or_else(Punnings::full);
        for (a, b) in punnings.pairs() {
            if !self.bindings.contains_key(&a) || !self.bindings.contains_key(&b) {
                return Err(Error::builder(format!(
                    "punning pair ({a}, {b}) references a kind not bound by '{name}'"
                )));
            }
        }
        for kind in self.builtins.keys() {
            if !self.bindings.contains_key(kind) {
                return Err(Error::builder(format!(
                    "builtins declared for unbound kind {kind} in '{name}'"
                )));
            }
        }
        Ok(Arc::new(Personality {
            name,
            bindings: self.bindings,
            builtins: self.builtins,
            reserved: self.reserved,
            punnings,
            config: self.config,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontograph_core::MemoryGraph;
    use ontograph_vocab::owl;

    fn minimal() -> Arc<Personality> {
        PersonalityBuilder::new("minimal")
            .bind(
                OntKind::Class,
                KindBinding::declared(vec![Node::iri(owl::CLASS)]),
            )
            .set_builtins(OntKind::Class, [Node::iri(owl::THING)])
            .set_reserved(Reserved::system())
            .build()
            .unwrap()
    }

    fn declare(g: &GraphRef, node: &Node, ty: &str) {
        g.add(Triple::new(node.clone(), Node::iri(rdf::TYPE), Node::iri(ty)))
            .unwrap();
    }

    #[test]
    fn test_builder_requires_name_and_bindings() {
        assert!(matches!(
            PersonalityBuilder::new("").build(),
            Err(Error::Builder(_))
        ));
        assert!(matches!(
            PersonalityBuilder::new("empty").build(),
            Err(Error::Builder(_))
        ));
    }

    #[test]
    fn test_builder_rejects_unbound_punning_pair() {
        let err = PersonalityBuilder::new("p")
            .bind(
                OntKind::Class,
                KindBinding::declared(vec![Node::iri(owl::CLASS)]),
            )
            .set_punnings(Punnings::full().with_pair(OntKind::Class, OntKind::Datatype))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Builder(_)));
    }

    #[test]
    fn test_builtin_qualifies_on_empty_graph() {
        let p = minimal();
        let g: GraphRef = MemoryGraph::new();
        assert!(p.can_view(&g, &Node::iri(owl::THING), OntKind::Class).unwrap());
    }

    #[test]
    fn test_reserved_never_qualifies() {
        let p = minimal();
        let g: GraphRef = MemoryGraph::new();
        // Declared, but in a system namespace and not a builtin.
        let node = Node::iri(owl::RESTRICTION);
        declare(&g, &node, owl::CLASS);
        assert!(!p.can_view(&g, &node, OntKind::Class).unwrap());
    }

    #[test]
    fn test_declaration_qualifies() {
        let p = minimal();
        let g: GraphRef = MemoryGraph::new();
        let node = Node::iri("http://e.org/C");
        assert!(!p.can_view(&g, &node, OntKind::Class).unwrap());
        declare(&g, &node, owl::CLASS);
        assert!(p.can_view(&g, &node, OntKind::Class).unwrap());
    }

    #[test]
    fn test_unbound_kind_is_an_error() {
        let p = minimal();
        let g: GraphRef = MemoryGraph::new();
        let err = p
            .can_view(&g, &Node::iri("http://e.org/C"), OntKind::Datatype)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedConstruct { .. }));
    }

    #[test]
    fn test_view_wraps_or_rejects() {
        let p = minimal();
        let g: GraphRef = MemoryGraph::new();
        let node = Node::iri("http://e.org/C");
        assert!(matches!(
            p.view(&g, &node, OntKind::Class),
            Err(Error::CannotViewAs { .. })
        ));
        declare(&g, &node, owl::CLASS);
        let obj = p.view(&g, &node, OntKind::Class).unwrap();
        assert_eq!(obj.kind(), OntKind::Class);
        assert_eq!(obj.node(), &node);
    }
}
