//! The storage seam: the `Graph` trait and the in-memory reference
//! implementation.
//!
//! `Graph` is the narrow interface this layer consumes from the underlying
//! triple-storage engine. Anything implementing it — a raw store, a
//! reasoner-bound graph, a wrapper, a union — participates uniformly in
//! graph composition. All methods take `&self`; implementations carry their
//! own interior locking. Structural sharing is by `Arc`, and *identity* (the
//! basis of every cycle-safe traversal) is `Arc` pointer identity, exposed
//! through [`graph_key`].
//!
//! # Caller contract
//!
//! Read operations may run concurrently with each other, but not with
//! structural mutation of the same composition. Serializing mutation is the
//! caller's responsibility; this layer adds no cross-operation locking.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::{Error, Result};
use crate::prefix::PrefixMapping;
use crate::term::{Triple, TriplePattern};
use crate::union::UnionGraph;

/// Shared handle to any graph implementation.
pub type GraphRef = Arc<dyn Graph>;

/// Identity key for a graph handle: the address of the shared allocation.
///
/// Two `GraphRef`s clone-derived from the same `Arc` yield the same key;
/// distinct graphs yield distinct keys. Every visited set in this crate is
/// keyed by this value.
pub fn graph_key(g: &GraphRef) -> usize {
    Arc::as_ptr(g) as *const u8 as usize
}

/// True when both handles refer to the same graph object.
pub fn same_graph(a: &GraphRef, b: &GraphRef) -> bool {
    graph_key(a) == graph_key(b)
}

/// The storage-graph interface consumed by the composition layer.
pub trait Graph: Send + Sync {
    /// All triples matching `pattern`. Implementations may snapshot.
    fn find(&self, pattern: &TriplePattern) -> Box<dyn Iterator<Item = Triple> + '_>;

    /// Membership test. The default probes via `find`.
    fn contains(&self, triple: &Triple) -> bool {
        self.find(&TriplePattern::of_triple(triple)).next().is_some()
    }

    /// Assert a triple. Fails on closed or read-only graphs.
    fn add(&self, triple: Triple) -> Result<()>;

    /// Retract a triple. Retracting an absent triple is a no-op.
    fn delete(&self, triple: &Triple) -> Result<()>;

    /// Fast triple count. `Err(NotSized)` when no fast count exists.
    fn size(&self) -> Result<usize>;

    fn is_closed(&self) -> bool;

    /// Release the graph. Idempotent; irreversible.
    fn close(&self);

    /// The graph's prefix mapping.
    fn prefixes(&self) -> Arc<PrefixMapping>;

    /// Downcast to a union graph, if this is one.
    fn as_union(&self) -> Option<&UnionGraph> {
        None
    }

    /// The directly wrapped graph, for wrapper implementations.
    /// `unwrap` and the union traversals strip these layers.
    fn wrapped(&self) -> Option<GraphRef> {
        None
    }
}

/// In-memory hash-set-backed graph. Always sized, never duplicated.
pub struct MemoryGraph {
    triples: RwLock<HashSet<Triple>>,
    closed: AtomicBool,
    prefixes: Arc<PrefixMapping>,
}

impl MemoryGraph {
    /// Empty graph with an empty prefix mapping.
    pub fn new() -> Arc<Self> {
        Arc::new(MemoryGraph {
            triples: RwLock::new(HashSet::new()),
            closed: AtomicBool::new(false),
            prefixes: PrefixMapping::empty(),
        })
    }

    /// Empty graph seeded with the standard rdf/rdfs/xsd/owl prefixes.
    pub fn with_standard_prefixes() -> Arc<Self> {
        Arc::new(MemoryGraph {
            triples: RwLock::new(HashSet::new()),
            closed: AtomicBool::new(false),
            prefixes: PrefixMapping::with_standard_prefixes(),
        })
    }

    fn check_open(&self) -> Result<()> {
        if self.is_closed() {
            Err(Error::closed("operation on closed MemoryGraph"))
        } else {
            Ok(())
        }
    }
}

impl Graph for MemoryGraph {
    fn find(&self, pattern: &TriplePattern) -> Box<dyn Iterator<Item = Triple> + '_> {
        let triples = self.triples.read().unwrap();
        let mut matched: Vec<Triple> = triples
            .iter()
            .filter(|t| pattern.matches(t))
            .cloned()
            .collect();
        // Deterministic yield order regardless of hash seeding
        matched.sort();
        Box::new(matched.into_iter())
    }

    fn contains(&self, triple: &Triple) -> bool {
        self.triples.read().unwrap().contains(triple)
    }

    fn add(&self, triple: Triple) -> Result<()> {
        self.check_open()?;
        self.triples.write().unwrap().insert(triple);
        Ok(())
    }

    fn delete(&self, triple: &Triple) -> Result<()> {
        self.check_open()?;
        self.triples.write().unwrap().remove(triple);
        Ok(())
    }

    fn size(&self) -> Result<usize> {
        Ok(self.triples.read().unwrap().len())
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn prefixes(&self) -> Arc<PrefixMapping> {
        self.prefixes.clone()
    }
}
