//! Graph wrappers: read-only enforcement and mutation events.
//!
//! Wrappers delegate the full `Graph` surface to an inner graph and expose
//! it through [`Graph::wrapped`] so that `topology::unwrap` and the union
//! traversals can strip them when establishing graph identity.

use std::sync::{Arc, RwLock};

use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphRef};
use crate::prefix::PrefixMapping;
use crate::term::{Triple, TriplePattern};

/// Read-only view over a graph.
///
/// Reads (including prefix lookups) fall through to the inner graph;
/// `add`/`delete` fail with [`Error::ReadOnlyGraph`] and prefix mutation
/// fails with [`Error::LockedPrefixMapping`].
pub struct ReadOnlyGraph {
    inner: GraphRef,
}

impl ReadOnlyGraph {
    pub fn wrap(inner: GraphRef) -> Arc<Self> {
        Arc::new(ReadOnlyGraph { inner })
    }

    pub fn inner(&self) -> &GraphRef {
        &self.inner
    }
}

impl Graph for ReadOnlyGraph {
    fn find(&self, pattern: &TriplePattern) -> Box<dyn Iterator<Item = Triple> + '_> {
        self.inner.find(pattern)
    }

    fn contains(&self, triple: &Triple) -> bool {
        self.inner.contains(triple)
    }

    fn add(&self, _triple: Triple) -> Result<()> {
        Err(Error::read_only("add on read-only graph"))
    }

    fn delete(&self, _triple: &Triple) -> Result<()> {
        Err(Error::read_only("delete on read-only graph"))
    }

    fn size(&self) -> Result<usize> {
        self.inner.size()
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn close(&self) {
        self.inner.close()
    }

    fn prefixes(&self) -> Arc<PrefixMapping> {
        self.inner.prefixes().locked_view()
    }

    fn wrapped(&self) -> Option<GraphRef> {
        Some(self.inner.clone())
    }
}

/// Observer of triple-level mutation on an [`EventGraph`].
///
/// Notification is synchronous and in registration order. A listener error
/// propagates to the mutating caller; the mutation itself has already been
/// applied when listeners run.
pub trait GraphListener: Send + Sync {
    fn triple_added(&self, triple: &Triple) -> Result<()> {
        let _ = triple;
        Ok(())
    }

    fn triple_deleted(&self, triple: &Triple) -> Result<()> {
        let _ = triple;
        Ok(())
    }
}

/// Wrapper that notifies registered listeners after each successful
/// mutation of the inner graph.
pub struct EventGraph {
    inner: GraphRef,
    listeners: RwLock<Vec<Arc<dyn GraphListener>>>,
}

impl EventGraph {
    pub fn wrap(inner: GraphRef) -> Arc<Self> {
        Arc::new(EventGraph {
            inner,
            listeners: RwLock::new(Vec::new()),
        })
    }

    pub fn register(&self, listener: Arc<dyn GraphListener>) {
        self.listeners.write().unwrap().push(listener);
    }

    pub fn inner(&self) -> &GraphRef {
        &self.inner
    }

    fn snapshot(&self) -> Vec<Arc<dyn GraphListener>> {
        self.listeners.read().unwrap().clone()
    }
}

impl Graph for EventGraph {
    fn find(&self, pattern: &TriplePattern) -> Box<dyn Iterator<Item = Triple> + '_> {
        self.inner.find(pattern)
    }

    fn contains(&self, triple: &Triple) -> bool {
        self.inner.contains(triple)
    }

    fn add(&self, triple: Triple) -> Result<()> {
        self.inner.add(triple.clone())?;
        trace!(triple = %triple, "triple added");
        for l in self.snapshot() {
            l.triple_added(&triple)?;
        }
        Ok(())
    }

    fn delete(&self, triple: &Triple) -> Result<()> {
        self.inner.delete(triple)?;
        trace!(triple = %triple, "triple deleted");
        for l in self.snapshot() {
            l.triple_deleted(triple)?;
        }
        Ok(())
    }

    fn size(&self) -> Result<usize> {
        self.inner.size()
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn close(&self) {
        self.inner.close()
    }

    fn prefixes(&self) -> Arc<PrefixMapping> {
        self.inner.prefixes()
    }

    fn wrapped(&self) -> Option<GraphRef> {
        Some(self.inner.clone())
    }
}
