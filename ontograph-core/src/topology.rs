//! Stateless algorithms over graph compositions.
//!
//! Everything here is a pure function over `GraphRef` structures: identity
//! unwrapping, leaf discovery, sizedness/distinctness analysis, prefix
//! collection, hierarchy flattening, and construction of an ontology
//! import-closure union tree from a pool of candidate graphs.
//!
//! Each traversal carries its own visited set keyed by graph identity, so
//! cyclic structures (including self-loops) always terminate.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace};

use ontograph_vocab::{owl, rdf};

use crate::error::Result;
use crate::graph::{graph_key, same_graph, GraphRef};
use crate::prefix::PrefixMapping;
use crate::term::{Node, TriplePattern};
use crate::union::UnionGraph;

/// Strip wrapper layers and subgraph-less unions down to the innermost
/// storage graph.
///
/// Wrapper graphs expose their inner graph via [`Graph::wrapped`]; a union
/// with no subgraphs is transparent and contributes only its base. The
/// result is the graph whose identity matters for "same base" comparisons.
pub fn unwrap(g: &GraphRef) -> GraphRef {
    let mut cur = g.clone();
    loop {
        if let Some(inner) = cur.wrapped() {
            cur = inner;
            continue;
        }
        let base = match cur.as_union() {
            Some(u) if !u.has_sub_graphs() => u.base(),
            _ => return cur,
        };
        cur = base;
    }
}

/// Immediate subgraphs when `g` is a union graph, empty otherwise.
pub fn direct_sub_graphs(g: &GraphRef) -> Vec<GraphRef> {
    g.as_union().map(|u| u.sub_graphs()).unwrap_or_default()
}

/// The leaves of a composition: every reachable innermost non-union storage
/// graph, deduplicated by identity, in discovery order.
pub fn data_graphs(g: &GraphRef) -> Vec<GraphRef> {
    let mut out: Vec<GraphRef> = Vec::new();
    let mut out_keys: HashSet<usize> = HashSet::new();
    let mut visited: HashSet<usize> = HashSet::new();
    let mut stack: Vec<GraphRef> = vec![g.clone()];
    while let Some(cur) = stack.pop() {
        if !visited.insert(graph_key(&cur)) {
            continue;
        }
        if let Some(inner) = cur.wrapped() {
            stack.push(inner);
            continue;
        }
        if let Some(u) = cur.as_union() {
            let mut members = u.sub_graphs();
            members.reverse();
            stack.extend(members);
            stack.push(u.base());
            continue;
        }
        if out_keys.insert(graph_key(&cur)) {
            out.push(cur);
        }
    }
    out
}

/// True iff `size()` can be computed for `g` without error.
///
/// Never errors itself; this is the predicate form of the hard failure
/// `size()` raises on non-sized compositions.
pub fn is_sized(g: &GraphRef) -> bool {
    g.size().is_ok()
}

/// True iff no duplicate triple can arise from the composition rooted at
/// `g`.
///
/// A lone storage graph is trivially distinct. A composition is distinct
/// when every union node carries the distinct flag, the structure is a
/// strict tree (no graph reachable twice, no cycles), and no leaf hides
/// behind a wrapper (wrapped identity cannot be verified unique). Never
/// errors.
pub fn is_distinct(g: &GraphRef) -> bool {
    fn walk(g: &GraphRef, visited: &mut HashSet<usize>) -> bool {
        if !visited.insert(graph_key(g)) {
            return false;
        }
        if g.wrapped().is_some() {
            return false;
        }
        match g.as_union() {
            Some(u) => {
                if u.has_sub_graphs() && !u.is_distinct() {
                    return false;
                }
                let mut members = vec![u.base()];
                members.extend(u.sub_graphs());
                members.iter().all(|m| walk(m, visited))
            }
            // a plain storage graph holds a set of triples
            None => true,
        }
    }
    walk(g, &mut HashSet::new())
}

/// True iff both handles resolve (via [`unwrap`]) to the same storage
/// graph, by reference identity. Triple content is never compared.
pub fn is_same_base(a: &GraphRef, b: &GraphRef) -> bool {
    same_graph(&unwrap(a), &unwrap(b))
}

/// Merge the prefix declarations of several graphs into one locked mapping.
///
/// The first occurrence of a prefix wins; later declarations of the same
/// prefix are ignored. The returned mapping rejects mutation.
pub fn collect_prefixes(graphs: &[GraphRef]) -> Arc<PrefixMapping> {
    let merged = PrefixMapping::empty();
    for g in graphs {
        for (prefix, ns) in g.prefixes().entries() {
            if merged.namespace_for(&prefix).is_none() {
                // merged is not locked yet, set_prefix cannot fail
                let _ = merged.set_prefix(prefix, ns);
            }
        }
    }
    merged.lock();
    merged
}

/// Every union graph node reachable from `root` (including `root`), DFS
/// pre-order, each distinct node exactly once. Wrapper layers between
/// unions are looked through.
pub fn flat_hierarchy(root: &Arc<UnionGraph>) -> Vec<Arc<UnionGraph>> {
    let mut out: Vec<Arc<UnionGraph>> = Vec::new();
    let mut visited: HashSet<usize> = HashSet::new();
    let mut stack: Vec<GraphRef> = vec![root.as_graph()];
    while let Some(cur) = stack.pop() {
        if !visited.insert(graph_key(&cur)) {
            continue;
        }
        if let Some(inner) = cur.wrapped() {
            stack.push(inner);
            continue;
        }
        if let Some(u) = UnionGraph::from_ref(&cur) {
            let mut members = u.sub_graphs();
            members.push(u.base());
            members.reverse();
            stack.extend(members);
            out.push(u);
        }
    }
    out
}

/// Ontology header of a document graph: the `owl:Ontology` node together
/// with its declared IRI, version IRI, and import IRIs.
#[derive(Debug, Clone)]
pub struct OntHeader {
    /// The ontology node itself (IRI or blank).
    pub id: Node,
    /// Declared ontology IRI, when the node is named.
    pub iri: Option<String>,
    /// `owl:versionIRI`, when declared.
    pub version_iri: Option<String>,
    /// `owl:imports` object IRIs, sorted.
    pub imports: Vec<String>,
}

/// Read the ontology header from a graph's own triples.
///
/// Returns `None` when the graph declares no `owl:Ontology` node. When
/// several are declared (malformed but possible), the lexicographically
/// smallest node wins, keeping header resolution deterministic.
pub fn ont_header(g: &GraphRef) -> Option<OntHeader> {
    let decl = TriplePattern::ANY
        .with_p(Node::iri(rdf::TYPE))
        .with_o(Node::iri(owl::ONTOLOGY));
    let id = g.find(&decl).map(|t| t.s).min()?;

    let version_iri = g
        .find(
            &TriplePattern::ANY
                .with_s(id.clone())
                .with_p(Node::iri(owl::VERSION_IRI)),
        )
        .filter_map(|t| t.o.as_iri().map(str::to_string))
        .min();

    let mut imports: Vec<String> = g
        .find(
            &TriplePattern::ANY
                .with_s(id.clone())
                .with_p(Node::iri(owl::IMPORTS)),
        )
        .filter_map(|t| t.o.as_iri().map(str::to_string))
        .collect();
    imports.sort();
    imports.dedup();

    let iri = id.as_iri().map(str::to_string);
    Some(OntHeader {
        id,
        iri,
        version_iri,
        imports,
    })
}

/// Build a union-graph tree mirroring the import closure of `root`.
///
/// Each candidate graph is indexed by its declared ontology IRI (and
/// version IRI, which also resolves imports); when several candidates
/// declare the same IRI, the first in the caller-supplied order wins.
/// Import cycles collapse to shared union instances: a graph already placed
/// in the tree is reused, never re-wrapped. Imports naming no candidate are
/// omitted without error.
///
/// `factory` produces the union node for each document graph, letting the
/// caller choose distinctness or any other union configuration.
pub fn make_ont_union<F>(
    root: &GraphRef,
    candidates: &[GraphRef],
    factory: F,
) -> Result<Arc<UnionGraph>>
where
    F: Fn(GraphRef) -> Arc<UnionGraph>,
{
    let mut by_iri: HashMap<String, GraphRef> = HashMap::new();
    for c in candidates {
        if let Some(h) = ont_header(c) {
            for key in h.iri.iter().chain(h.version_iri.iter()) {
                by_iri.entry(key.clone()).or_insert_with(|| c.clone());
            }
        }
    }
    debug!(candidates = candidates.len(), resolvable = by_iri.len(), "assembling import tree");

    let mut placed: HashMap<usize, Arc<UnionGraph>> = HashMap::new();
    assemble(root, &by_iri, &mut placed, &factory)
}

fn assemble<F>(
    g: &GraphRef,
    by_iri: &HashMap<String, GraphRef>,
    placed: &mut HashMap<usize, Arc<UnionGraph>>,
    factory: &F,
) -> Result<Arc<UnionGraph>>
where
    F: Fn(GraphRef) -> Arc<UnionGraph>,
{
    if let Some(existing) = placed.get(&graph_key(g)) {
        return Ok(existing.clone());
    }
    let node = factory(g.clone());
    // Place before descending so import cycles resolve to this instance.
    placed.insert(graph_key(g), node.clone());

    let imports = ont_header(g).map(|h| h.imports).unwrap_or_default();
    for import in imports {
        match by_iri.get(&import) {
            Some(candidate) => {
                let sub = assemble(candidate, by_iri, placed, factory)?;
                node.add_sub_graph(sub.as_graph())?;
            }
            None => trace!(iri = %import, "import has no candidate graph, omitted"),
        }
    }
    Ok(node)
}

/// True iff the union tree looks like one produced by [`make_ont_union`]:
/// every reachable union node's base declares an ontology header and every
/// subgraph is itself a union node.
///
/// With `strict`, each subgraph must additionally resolve one of its
/// parent's declared imports (by ontology IRI or version IRI); undeclared
/// extra subgraphs are rejected. Without `strict`, extras are tolerated as
/// long as they carry headers themselves.
pub fn is_ont_union_graph(root: &Arc<UnionGraph>, strict: bool) -> bool {
    for node in flat_hierarchy(root) {
        let Some(header) = ont_header(&node.base()) else {
            return false;
        };
        for sub in node.sub_graphs() {
            let Some(sub_union) = UnionGraph::from_ref(&sub) else {
                return false;
            };
            if strict {
                let declared = ont_header(&sub_union.base()).is_some_and(|sh| {
                    sh.iri
                        .iter()
                        .chain(sh.version_iri.iter())
                        .any(|iri| header.imports.contains(iri))
                });
                if !declared {
                    return false;
                }
            }
        }
    }
    true
}
