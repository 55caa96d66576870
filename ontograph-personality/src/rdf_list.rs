//! RDF list reading and construction.

use std::collections::HashSet;

use ontograph_core::{GraphRef, Node, Triple, TriplePattern};
use ontograph_vocab::rdf;

use crate::error::Result;

/// Objects of `(subject, predicate, ?)` in the graph.
pub(crate) fn objects(graph: &GraphRef, subject: &Node, predicate: &str) -> Vec<Node> {
    graph
        .find(
            &TriplePattern::ANY
                .with_s(subject.clone())
                .with_p(Node::iri(predicate)),
        )
        .map(|t| t.o)
        .collect()
}

/// First object of `(subject, predicate, ?)`, if any.
pub(crate) fn object(graph: &GraphRef, subject: &Node, predicate: &str) -> Option<Node> {
    objects(graph, subject, predicate).into_iter().next()
}

/// True when the graph holds at least one `(subject, predicate, ?)` triple.
pub(crate) fn has(graph: &GraphRef, subject: &Node, predicate: &str) -> bool {
    graph
        .find(
            &TriplePattern::ANY
                .with_s(subject.clone())
                .with_p(Node::iri(predicate)),
        )
        .next()
        .is_some()
}

/// Collect the elements of an RDF list starting at `head`.
///
/// Follows `rdf:first`/`rdf:rest` until `rdf:nil`. Malformed lists (missing
/// links, cycles) terminate at the damage: elements gathered so far are
/// returned.
pub fn collect_list_elements(graph: &GraphRef, head: &Node) -> Vec<Node> {
    let mut out = Vec::new();
    let mut seen: HashSet<Node> = HashSet::new();
    let mut cursor = head.clone();
    loop {
        if cursor == Node::iri(rdf::NIL) || !seen.insert(cursor.clone()) {
            return out;
        }
        match object(graph, &cursor, rdf::FIRST) {
            Some(first) => out.push(first),
            None => return out,
        }
        match object(graph, &cursor, rdf::REST) {
            Some(rest) => cursor = rest,
            None => return out,
        }
    }
}

/// Materialize `items` as an RDF list in the graph, returning its head node
/// (`rdf:nil` for an empty list).
pub fn build_list(graph: &GraphRef, items: &[Node]) -> Result<Node> {
    let mut head = Node::iri(rdf::NIL);
    for item in items.iter().rev() {
        let cell = Node::blank();
        graph.add(Triple::new(cell.clone(), Node::iri(rdf::FIRST), item.clone()))?;
        graph.add(Triple::new(cell.clone(), Node::iri(rdf::REST), head))?;
        head = cell;
    }
    Ok(head)
}
