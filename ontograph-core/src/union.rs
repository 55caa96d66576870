//! Union graphs: a composite graph presenting the logical union of a base
//! graph and an ordered set of subgraphs.
//!
//! ## Invariants
//!
//! - Containment: a union graph has a triple iff its base graph has it or
//!   any (transitively reachable) subgraph has it.
//! - Every traversal (find, contains, size, close, hierarchy listing)
//!   carries its own visited set keyed by graph identity. Self-reference
//!   and mutual reference among subgraphs are supported, never exceptional:
//!   no traversal asks the same graph twice.
//! - Subgraphs are shared by reference; their lifetime is independent of
//!   any one parent. `close()` is a broadcast lifecycle signal: it cascades
//!   over base edges, subgraph edges, and (for union parents, which register
//!   a backlink on attach) super-graph edges, so the whole connected union
//!   structure reports closed. A *plain* graph shared by two otherwise
//!   unconnected unions does not bridge the cascade — only union nodes
//!   carry parent registrations.
//! - Structural mutation of a closed union graph fails fast with
//!   [`Error::ClosedGraph`].
//!
//! Concurrent structural mutation of a shared union graph must be
//! serialized by the caller (see the crate-level contract in `graph`).

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, Weak};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{graph_key, same_graph, Graph, GraphRef};
use crate::prefix::PrefixMapping;
use crate::term::{Triple, TriplePattern};

/// Observer of subgraph attach/detach on a [`UnionGraph`].
///
/// Called synchronously, in registration order, after the structural change
/// has been applied. An error propagates to the mutating caller; the change
/// itself stays.
pub trait UnionListener: Send + Sync {
    fn sub_graph_added(&self, graph: &GraphRef) -> Result<()> {
        let _ = graph;
        Ok(())
    }

    fn sub_graph_removed(&self, graph: &GraphRef) -> Result<()> {
        let _ = graph;
        Ok(())
    }
}

/// Composite graph over a mandatory base graph and zero or more subgraphs.
///
/// Constructed via [`UnionGraph::new`] or [`UnionGraph::new_distinct`]; the
/// distinct flag (duplicate elimination during iteration) is fixed at
/// construction. Implements [`Graph`], so union graphs nest arbitrarily —
/// including cyclically.
pub struct UnionGraph {
    base: GraphRef,
    subs: RwLock<Vec<GraphRef>>,
    distinct: bool,
    closed: AtomicBool,
    /// Union parents, registered on attach. Pruned lazily.
    parents: RwLock<Vec<Weak<UnionGraph>>>,
    listeners: RwLock<Vec<Arc<dyn UnionListener>>>,
    self_weak: Weak<UnionGraph>,
}

impl UnionGraph {
    /// Union graph over `base` with no duplicate elimination.
    pub fn new(base: GraphRef) -> Arc<Self> {
        Self::build(base, false)
    }

    /// Union graph over `base` that eliminates duplicate triples during
    /// iteration.
    pub fn new_distinct(base: GraphRef) -> Arc<Self> {
        Self::build(base, true)
    }

    fn build(base: GraphRef, distinct: bool) -> Arc<Self> {
        Arc::new_cyclic(|w| UnionGraph {
            base,
            subs: RwLock::new(Vec::new()),
            distinct,
            closed: AtomicBool::new(false),
            parents: RwLock::new(Vec::new()),
            listeners: RwLock::new(Vec::new()),
            self_weak: w.clone(),
        })
    }

    /// Recover the shared handle from a `GraphRef`, if it is a union graph.
    pub fn from_ref(g: &GraphRef) -> Option<Arc<UnionGraph>> {
        g.as_union().map(|u| u.self_arc())
    }

    /// This union graph as a shareable `GraphRef`.
    pub fn as_graph(self: &Arc<Self>) -> GraphRef {
        self.clone()
    }

    /// Identity key, consistent with [`graph_key`] on a handle to this graph.
    pub fn id(&self) -> usize {
        self as *const UnionGraph as usize
    }

    fn self_arc(&self) -> Arc<UnionGraph> {
        // self_weak is seeded in build(); upgrading can only fail while the
        // allocation is being dropped, at which point no &self exists.
        self.self_weak.upgrade().expect("union graph still alive")
    }

    /// The base graph.
    pub fn base(&self) -> GraphRef {
        self.base.clone()
    }

    /// Whether iteration eliminates duplicates.
    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn has_sub_graphs(&self) -> bool {
        !self.subs.read().unwrap().is_empty()
    }

    /// Direct subgraphs, in attach order.
    pub fn sub_graphs(&self) -> Vec<GraphRef> {
        self.subs.read().unwrap().clone()
    }

    /// Union graphs currently holding this graph as a direct subgraph.
    pub fn super_graphs(&self) -> Vec<Arc<UnionGraph>> {
        let mut out: Vec<Arc<UnionGraph>> = Vec::new();
        let mut seen: HashSet<usize> = HashSet::new();
        for w in self.parents.read().unwrap().iter() {
            if let Some(p) = w.upgrade() {
                if seen.insert(p.id()) {
                    out.push(p);
                }
            }
        }
        out
    }

    /// Register a structural-change listener.
    pub fn register(&self, listener: Arc<dyn UnionListener>) {
        self.listeners.write().unwrap().push(listener);
    }

    /// Attach a subgraph. Idempotent by identity; attaching `self` is
    /// tolerated (recorded once, skipped during traversal). Fails when
    /// closed. Listeners are notified exactly once per actual change.
    pub fn add_sub_graph(self: &Arc<Self>, graph: GraphRef) -> Result<()> {
        self.check_open("add_sub_graph")?;
        {
            let mut subs = self.subs.write().unwrap();
            if subs.iter().any(|g| same_graph(g, &graph)) {
                return Ok(());
            }
            subs.push(graph.clone());
        }
        if let Some(sub) = graph.as_union() {
            if sub.id() != self.id() {
                sub.parents.write().unwrap().push(Arc::downgrade(self));
            }
        }
        debug!(parent = self.id(), sub = graph_key(&graph), "subgraph attached");
        for l in self.listener_snapshot() {
            l.sub_graph_added(&graph)?;
        }
        Ok(())
    }

    /// Detach a subgraph by identity. No-op when absent. Fails when closed.
    /// Listeners are notified only on actual removal.
    pub fn remove_sub_graph(self: &Arc<Self>, graph: &GraphRef) -> Result<()> {
        self.check_open("remove_sub_graph")?;
        let removed = {
            let mut subs = self.subs.write().unwrap();
            match subs.iter().position(|g| same_graph(g, graph)) {
                Some(idx) => Some(subs.remove(idx)),
                None => None,
            }
        };
        let Some(removed) = removed else {
            return Ok(());
        };
        if let Some(sub) = removed.as_union() {
            let my_id = self.id();
            sub.parents
                .write()
                .unwrap()
                .retain(|w| w.upgrade().map_or(false, |p| p.id() != my_id));
        }
        debug!(parent = self.id(), sub = graph_key(&removed), "subgraph detached");
        for l in self.listener_snapshot() {
            l.sub_graph_removed(&removed)?;
        }
        Ok(())
    }

    fn listener_snapshot(&self) -> Vec<Arc<dyn UnionListener>> {
        self.listeners.read().unwrap().clone()
    }

    fn check_open(&self, op: &str) -> Result<()> {
        if self.is_closed() {
            Err(Error::closed(format!("{} on closed union graph", op)))
        } else {
            Ok(())
        }
    }

    /// Members in traversal order: base first, then subgraphs.
    fn members(&self) -> Vec<GraphRef> {
        let mut out = Vec::with_capacity(1 + self.subs.read().unwrap().len());
        out.push(self.base.clone());
        out.extend(self.subs.read().unwrap().iter().cloned());
        out
    }

    /// Non-distinct size: sum of member sizes, with a shared visited set so
    /// that a member reachable twice (cycle or sharing) reports
    /// [`Error::NotSized`] instead of double counting.
    fn summed_size(&self, visited: &mut HashSet<usize>) -> Result<usize> {
        let mut total = 0usize;
        for member in self.members() {
            total += member_size(&member, visited)?;
        }
        Ok(total)
    }
}

/// Size contribution of one union member, expanding wrappers and
/// non-distinct unions under the caller's visited set. Distinct unions are
/// self-contained (they count by deduplicated iteration).
fn member_size(g: &GraphRef, visited: &mut HashSet<usize>) -> Result<usize> {
    if !visited.insert(graph_key(g)) {
        return Err(Error::not_sized(
            "graph reachable twice in union composition",
        ));
    }
    if let Some(inner) = g.wrapped() {
        return member_size(&inner, visited);
    }
    if let Some(u) = g.as_union() {
        if u.distinct {
            return u.size();
        }
        return u.summed_size(visited);
    }
    g.size()
}

impl Graph for UnionGraph {
    /// Lazy union of base and subgraph matches. One visited set governs the
    /// whole traversal: nested unions and wrappers are expanded in place, so
    /// cycles and self-reference terminate and each member graph is queried
    /// exactly once. With the distinct flag, duplicate triples are filtered.
    fn find(&self, pattern: &TriplePattern) -> Box<dyn Iterator<Item = Triple> + '_> {
        let mut visited = HashSet::new();
        visited.insert(self.id());
        let mut queue: VecDeque<GraphRef> = VecDeque::new();
        queue.extend(self.members());
        Box::new(UnionIter {
            pattern: pattern.clone(),
            queue,
            visited,
            seen: if self.distinct { Some(HashSet::new()) } else { None },
            current: Vec::new().into_iter(),
        })
    }

    /// Short-circuiting containment: base first, then subgraphs depth-first,
    /// cycle-safe.
    fn contains(&self, triple: &Triple) -> bool {
        let mut visited = HashSet::new();
        visited.insert(self.id());
        let mut stack: Vec<GraphRef> = self.members();
        stack.reverse(); // pop base first
        while let Some(g) = stack.pop() {
            if !visited.insert(graph_key(&g)) {
                continue;
            }
            if let Some(inner) = g.wrapped() {
                stack.push(inner);
                continue;
            }
            if let Some(u) = g.as_union() {
                let mut members = u.members();
                members.reverse();
                stack.extend(members);
                continue;
            }
            if g.contains(triple) {
                return true;
            }
        }
        false
    }

    /// Triples added through a union graph land in its base graph.
    fn add(&self, triple: Triple) -> Result<()> {
        self.check_open("add")?;
        self.base.add(triple)
    }

    fn delete(&self, triple: &Triple) -> Result<()> {
        self.check_open("delete")?;
        self.base.delete(triple)
    }

    /// Distinct unions count by deduplicated iteration (always computable).
    /// Non-distinct unions sum member sizes and fail with
    /// [`Error::NotSized`] when a member has no fast count or is reachable
    /// via more than one path.
    fn size(&self) -> Result<usize> {
        if self.distinct {
            return Ok(self.find(&TriplePattern::ANY).count());
        }
        let mut visited = HashSet::new();
        visited.insert(self.id());
        self.summed_size(&mut visited)
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Broadcast close over the connected structure: base, subgraphs, and
    /// union parents. The closed flag doubles as the visited marker, so
    /// cyclic structures terminate.
    fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        debug!(union = self.id(), "closing union graph component");
        self.base.close();
        for sub in self.sub_graphs() {
            sub.close();
        }
        for parent in self.super_graphs() {
            parent.close();
        }
    }

    /// Delegates to the base graph's mapping.
    fn prefixes(&self) -> Arc<PrefixMapping> {
        self.base.prefixes()
    }

    fn as_union(&self) -> Option<&UnionGraph> {
        Some(self)
    }
}

struct UnionIter {
    pattern: TriplePattern,
    queue: VecDeque<GraphRef>,
    visited: HashSet<usize>,
    seen: Option<HashSet<Triple>>,
    current: std::vec::IntoIter<Triple>,
}

impl Iterator for UnionIter {
    type Item = Triple;

    fn next(&mut self) -> Option<Triple> {
        loop {
            if let Some(t) = self.current.next() {
                if let Some(seen) = &mut self.seen {
                    if !seen.insert(t.clone()) {
                        continue;
                    }
                }
                return Some(t);
            }
            let g = self.queue.pop_front()?;
            if !self.visited.insert(graph_key(&g)) {
                continue;
            }
            if let Some(inner) = g.wrapped() {
                self.queue.push_front(inner);
                continue;
            }
            if let Some(u) = g.as_union() {
                // Expand in place; the union's own triples live in its base.
                let members = u.members();
                for m in members.into_iter().rev() {
                    self.queue.push_front(m);
                }
                continue;
            }
            self.current = g.find(&self.pattern).collect::<Vec<_>>().into_iter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MemoryGraph;
    use crate::term::Node;
    use std::sync::atomic::AtomicUsize;

    fn t(s: &str) -> Triple {
        Triple::new(
            Node::iri(s),
            Node::iri("http://e.org/p"),
            Node::iri("http://e.org/o"),
        )
    }

    fn seeded(iri: &str) -> GraphRef {
        let g = MemoryGraph::new();
        g.add(t(iri)).unwrap();
        g
    }

    #[test]
    fn test_union_of_base_and_sub() {
        let base = seeded("http://e.org/a");
        let sub = seeded("http://e.org/b");
        let u = UnionGraph::new(base);
        u.add_sub_graph(sub).unwrap();

        assert!(u.contains(&t("http://e.org/a")));
        assert!(u.contains(&t("http://e.org/b")));
        assert!(!u.contains(&t("http://e.org/c")));

        let all: Vec<Triple> = u.find(&TriplePattern::ANY).collect();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_add_sub_graph_idempotent() {
        let u = UnionGraph::new(MemoryGraph::new());
        let sub = seeded("http://e.org/b");
        u.add_sub_graph(sub.clone()).unwrap();
        u.add_sub_graph(sub.clone()).unwrap();
        assert_eq!(u.sub_graphs().len(), 1);
    }

    #[test]
    fn test_self_reference_tolerated() {
        let base = seeded("http://e.org/a");
        let u = UnionGraph::new(base);
        let self_ref: GraphRef = u.clone();
        u.add_sub_graph(self_ref).unwrap();

        // No double iteration, no infinite loop
        let all: Vec<Triple> = u.find(&TriplePattern::ANY).collect();
        assert_eq!(all, vec![t("http://e.org/a")]);
        assert!(u.contains(&t("http://e.org/a")));
    }

    #[test]
    fn test_mutual_cycle_terminates() {
        let u1 = UnionGraph::new(seeded("http://e.org/a"));
        let u2 = UnionGraph::new(seeded("http://e.org/b"));
        u1.add_sub_graph(u2.as_graph()).unwrap();
        u2.add_sub_graph(u1.as_graph()).unwrap();

        let from_u1: Vec<Triple> = u1.find(&TriplePattern::ANY).collect();
        assert_eq!(from_u1.len(), 2);
        assert!(u2.contains(&t("http://e.org/a")));
    }

    #[test]
    fn test_distinct_filters_duplicates() {
        let shared = t("http://e.org/shared");
        let g1 = MemoryGraph::new();
        g1.add(shared.clone()).unwrap();
        let g2 = MemoryGraph::new();
        g2.add(shared.clone()).unwrap();

        let plain = UnionGraph::new(g1.clone());
        plain.add_sub_graph(g2.clone()).unwrap();
        let found: Vec<Triple> = plain.find(&TriplePattern::ANY).collect();
        assert_eq!(found.len(), 2);

        let distinct = UnionGraph::new_distinct(g1);
        distinct.add_sub_graph(g2).unwrap();
        let found: Vec<Triple> = distinct.find(&TriplePattern::ANY).collect();
        assert_eq!(found, vec![shared]);
    }

    #[test]
    fn test_remove_sub_graph() {
        let u = UnionGraph::new(MemoryGraph::new());
        let sub = seeded("http://e.org/b");
        u.add_sub_graph(sub.clone()).unwrap();
        assert!(u.contains(&t("http://e.org/b")));

        u.remove_sub_graph(&sub).unwrap();
        assert!(!u.contains(&t("http://e.org/b")));
        // removing again is a no-op
        u.remove_sub_graph(&sub).unwrap();
    }

    #[test]
    fn test_super_graphs_tracked() {
        let parent = UnionGraph::new(MemoryGraph::new());
        let child = UnionGraph::new(MemoryGraph::new());
        parent.add_sub_graph(child.as_graph()).unwrap();

        let supers = child.super_graphs();
        assert_eq!(supers.len(), 1);
        assert_eq!(supers[0].id(), parent.id());

        parent
            .remove_sub_graph(&child.as_graph())
            .unwrap();
        assert!(child.super_graphs().is_empty());
    }

    #[test]
    fn test_closed_rejects_structural_mutation() {
        let u = UnionGraph::new(MemoryGraph::new());
        u.close();
        let err = u.add_sub_graph(seeded("http://e.org/b")).unwrap_err();
        assert!(matches!(err, Error::ClosedGraph(_)));
    }

    #[test]
    fn test_close_cascades_both_directions() {
        let top = UnionGraph::new(MemoryGraph::new());
        let mid = UnionGraph::new(MemoryGraph::new());
        let leaf = MemoryGraph::new();
        top.add_sub_graph(mid.as_graph()).unwrap();
        mid.add_sub_graph(leaf.clone()).unwrap();

        // Closing the middle closes descendants and ancestors
        mid.close();
        assert!(top.is_closed());
        assert!(mid.is_closed());
        assert!(leaf.is_closed());
    }

    #[test]
    fn test_close_cascades_through_cycle() {
        let u1 = UnionGraph::new(MemoryGraph::new());
        let u2 = UnionGraph::new(MemoryGraph::new());
        u1.add_sub_graph(u2.as_graph()).unwrap();
        u2.add_sub_graph(u1.as_graph()).unwrap();

        u1.close();
        assert!(u1.is_closed());
        assert!(u2.is_closed());
    }

    #[test]
    fn test_size_sums_tree() {
        let u = UnionGraph::new(seeded("http://e.org/a"));
        u.add_sub_graph(seeded("http://e.org/b")).unwrap();
        u.add_sub_graph(seeded("http://e.org/c")).unwrap();
        assert_eq!(u.size().unwrap(), 3);
    }

    #[test]
    fn test_size_fails_on_cycle() {
        let u = UnionGraph::new(seeded("http://e.org/a"));
        u.add_sub_graph(u.as_graph()).unwrap();
        assert!(matches!(u.size().unwrap_err(), Error::NotSized(_)));
    }

    #[test]
    fn test_size_fails_on_shared_member() {
        let shared = seeded("http://e.org/s");
        let u1 = UnionGraph::new(MemoryGraph::new());
        let u2 = UnionGraph::new(MemoryGraph::new());
        u1.add_sub_graph(shared.clone()).unwrap();
        u2.add_sub_graph(shared).unwrap();

        let top = UnionGraph::new(MemoryGraph::new());
        top.add_sub_graph(u1.as_graph()).unwrap();
        top.add_sub_graph(u2.as_graph()).unwrap();
        assert!(matches!(top.size().unwrap_err(), Error::NotSized(_)));
    }

    #[test]
    fn test_distinct_size_handles_cycles() {
        let u = UnionGraph::new_distinct(seeded("http://e.org/a"));
        u.add_sub_graph(u.as_graph()).unwrap();
        assert_eq!(u.size().unwrap(), 1);
    }

    struct CountingListener {
        added: AtomicUsize,
        removed: AtomicUsize,
    }

    impl UnionListener for CountingListener {
        fn sub_graph_added(&self, _: &GraphRef) -> Result<()> {
            self.added.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn sub_graph_removed(&self, _: &GraphRef) -> Result<()> {
            self.removed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_listener_fires_once_per_change() {
        let u = UnionGraph::new(MemoryGraph::new());
        let l = Arc::new(CountingListener {
            added: AtomicUsize::new(0),
            removed: AtomicUsize::new(0),
        });
        u.register(l.clone());

        let sub = seeded("http://e.org/b");
        u.add_sub_graph(sub.clone()).unwrap();
        u.add_sub_graph(sub.clone()).unwrap(); // idempotent, no event
        u.remove_sub_graph(&sub).unwrap();
        u.remove_sub_graph(&sub).unwrap(); // absent, no event

        assert_eq!(l.added.load(Ordering::SeqCst), 1);
        assert_eq!(l.removed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_union_add_lands_in_base() {
        let base = MemoryGraph::new();
        let u = UnionGraph::new(base.clone());
        u.add(t("http://e.org/new")).unwrap();
        assert!(base.contains(&t("http://e.org/new")));

        u.delete(&t("http://e.org/new")).unwrap();
        assert!(!base.contains(&t("http://e.org/new")));
    }

    #[test]
    fn test_find_order_base_then_subs() {
        let base = seeded("http://e.org/a");
        let u = UnionGraph::new(base);
        u.add_sub_graph(seeded("http://e.org/b")).unwrap();

        let all: Vec<Triple> = u.find(&TriplePattern::ANY).collect();
        assert_eq!(all[0], t("http://e.org/a"));
        assert_eq!(all[1], t("http://e.org/b"));
    }
}
