//! Composition-level behavior of union graphs: cycle safety, close
//! cascades, same-base identity, distinctness, and import-tree assembly.

use ontograph_core::{
    data_graphs, flat_hierarchy, is_distinct, is_same_base, make_ont_union, same_graph, Graph,
    GraphRef, MemoryGraph, Node, ReadOnlyGraph, Triple, TriplePattern, UnionGraph,
};
use ontograph_vocab::{owl, rdf};

fn triple(s: &str) -> Triple {
    Triple::new(
        Node::iri(s),
        Node::iri("http://example.org/p"),
        Node::iri("http://example.org/o"),
    )
}

fn seeded(s: &str) -> GraphRef {
    let g = MemoryGraph::new();
    g.add(triple(s)).unwrap();
    g
}

fn ont_doc(iri: &str, imports: &[&str]) -> GraphRef {
    let g = MemoryGraph::new();
    g.add(Triple::new(
        Node::iri(iri),
        Node::iri(rdf::TYPE),
        Node::iri(owl::ONTOLOGY),
    ))
    .unwrap();
    for imp in imports {
        g.add(Triple::new(
            Node::iri(iri),
            Node::iri(owl::IMPORTS),
            Node::iri(imp),
        ))
        .unwrap();
    }
    g
}

/// P1: traversals over cyclic structures terminate and visit each distinct
/// node exactly once.
#[test]
fn cycle_safety_across_operations() {
    let u1 = UnionGraph::new(seeded("http://example.org/a"));
    let u2 = UnionGraph::new(seeded("http://example.org/b"));
    let u3 = UnionGraph::new(seeded("http://example.org/c"));
    u1.add_sub_graph(u2.as_graph()).unwrap();
    u2.add_sub_graph(u3.as_graph()).unwrap();
    u3.add_sub_graph(u1.as_graph()).unwrap();
    u1.add_sub_graph(u1.as_graph()).unwrap(); // self-loop on top

    let found: Vec<Triple> = u1.find(&TriplePattern::ANY).collect();
    assert_eq!(found.len(), 3);

    assert!(u1.contains(&triple("http://example.org/c")));
    assert!(u3.contains(&triple("http://example.org/a")));

    assert_eq!(flat_hierarchy(&u1).len(), 3);
    assert_eq!(u3.super_graphs().len(), 1);
    assert_eq!(data_graphs(&u1.as_graph()).len(), 3);
}

/// P2: closing any union graph in a connected structure closes all of it,
/// including nodes reachable only against the subgraph direction.
#[test]
fn close_cascade_covers_connected_component() {
    let left = UnionGraph::new(MemoryGraph::new());
    let middle = UnionGraph::new(MemoryGraph::new());
    let right = UnionGraph::new(MemoryGraph::new());
    let shared = UnionGraph::new(MemoryGraph::new());

    left.add_sub_graph(shared.as_graph()).unwrap();
    right.add_sub_graph(shared.as_graph()).unwrap();
    middle.add_sub_graph(right.as_graph()).unwrap();

    // `left` is reachable from `right` only via shared's parent links
    right.close();

    assert!(right.is_closed());
    assert!(shared.is_closed());
    assert!(left.is_closed());
    assert!(middle.is_closed());
    assert!(left.base().is_closed());
}

/// P3: same-base identity holds through any wrapping depth.
#[test]
fn same_base_through_wrappers() {
    let origin: GraphRef = MemoryGraph::new();

    let union_of_plain = UnionGraph::new(origin.clone()).as_graph();
    let union_of_ro = UnionGraph::new(ReadOnlyGraph::wrap(origin.clone())).as_graph();
    let nested: GraphRef = ReadOnlyGraph::wrap(ReadOnlyGraph::wrap(origin.clone()));
    let union_of_nested = UnionGraph::new(nested).as_graph();

    for g in [&union_of_plain, &union_of_ro, &union_of_nested] {
        assert!(is_same_base(g, &origin));
    }
    assert!(is_same_base(&union_of_ro, &union_of_nested));
}

/// P4: tree-shaped distinct composition is distinct; cycles and wrapped
/// subgraphs break it.
#[test]
fn distinctness_analysis() {
    let root = UnionGraph::new_distinct(MemoryGraph::new());
    for _ in 0..3 {
        let child = UnionGraph::new_distinct(MemoryGraph::new());
        root.add_sub_graph(child.as_graph()).unwrap();
    }
    assert!(is_distinct(&root.as_graph()));

    let cyclic = UnionGraph::new_distinct(MemoryGraph::new());
    let child = UnionGraph::new_distinct(MemoryGraph::new());
    cyclic.add_sub_graph(child.as_graph()).unwrap();
    child.add_sub_graph(cyclic.as_graph()).unwrap();
    assert!(!is_distinct(&cyclic.as_graph()));

    let wrapped = UnionGraph::new_distinct(MemoryGraph::new());
    wrapped
        .add_sub_graph(ReadOnlyGraph::wrap(MemoryGraph::new()))
        .unwrap();
    assert!(!is_distinct(&wrapped.as_graph()));
}

/// A union holding itself as a subgraph yields exactly the base and the
/// other subgraph's triples, no duplication, no hang.
#[test]
fn self_referencing_union_finds_exactly_its_members() {
    let g1 = seeded("http://example.org/from-g1");
    let g2 = seeded("http://example.org/from-g2");
    let u = UnionGraph::new(g1.clone());
    u.add_sub_graph(g2.clone()).unwrap();
    u.add_sub_graph(u.as_graph()).unwrap();

    let mut found: Vec<Triple> = u.find(&TriplePattern::ANY).collect();
    found.sort();
    let mut expected: Vec<Triple> = g1
        .find(&TriplePattern::ANY)
        .chain(g2.find(&TriplePattern::ANY))
        .collect();
    expected.sort();
    assert_eq!(found, expected);
}

/// An import closure containing a cycle assembles into a tree where the
/// cycle collapses to one shared union instance.
#[test]
fn import_closure_cycle_collapses_to_shared_instance() {
    let a = ont_doc("http://o/A", &["http://o/B", "http://o/C"]);
    let b = ont_doc("http://o/B", &[]);
    let c = ont_doc("http://o/C", &["http://o/D"]);
    let d = ont_doc("http://o/D", &["http://o/E"]);
    let e = ont_doc("http://o/E", &["http://o/C", "http://o/F", "http://o/G"]);
    let f = ont_doc("http://o/F", &["http://o/H"]);
    let g = ont_doc("http://o/G", &[]);
    let h = ont_doc("http://o/H", &[]);
    let pool = [
        a.clone(),
        b,
        c.clone(),
        d,
        e,
        f,
        g,
        h.clone(),
    ];

    let root = make_ont_union(&a, &pool, UnionGraph::new).unwrap();
    assert_eq!(flat_hierarchy(&root).len(), 8);

    let find_child = |u: &std::sync::Arc<UnionGraph>, base: &GraphRef| {
        u.sub_graphs()
            .into_iter()
            .filter_map(|s| UnionGraph::from_ref(&s))
            .find(|cand| same_graph(&cand.base(), base))
            .unwrap()
    };

    let c_union = find_child(&root, &c);
    let d_union = UnionGraph::from_ref(&c_union.sub_graphs()[0]).unwrap();
    let e_union = UnionGraph::from_ref(&d_union.sub_graphs()[0]).unwrap();
    let c_via_cycle = find_child(&e_union, &c);
    assert_eq!(c_via_cycle.id(), c_union.id());

    let h_union = flat_hierarchy(&root)
        .into_iter()
        .find(|u| same_graph(&u.base(), &h))
        .unwrap();
    assert!(!h_union.has_sub_graphs());
}
