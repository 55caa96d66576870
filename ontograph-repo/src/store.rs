//! Store-backed graph repository.
//!
//! Serves graphs by ontology IRI out of a [`GraphStore`]. The index from
//! ontology IRI to store name is built by [`rescan`](StoreGraphRepository::rescan),
//! which reads each stored graph's ontology header. Rescanning rebuilds the
//! index wholesale, so a stored graph whose header IRI changed is remapped:
//! the stale id stops resolving and the new one points at the same stored
//! graph.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use ontograph_core::{ont_header, GraphRef};

use crate::error::{Error, Result};
use crate::source::GraphStore;

/// Repository resolving ontology IRIs against a backing store.
pub struct StoreGraphRepository {
    store: Arc<dyn GraphStore>,
    // ontology IRI (or version IRI) -> store name
    index: RwLock<HashMap<String, String>>,
}

impl StoreGraphRepository {
    /// Repository over `store` with an empty index; call
    /// [`rescan`](Self::rescan) before resolving ids.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        StoreGraphRepository {
            store,
            index: RwLock::new(HashMap::new()),
        }
    }

    /// Rebuild the id index from the store's current contents.
    ///
    /// Each stored graph contributes its ontology IRI and version IRI as
    /// ids; on a key collision the lexicographically first store name wins,
    /// keeping scans deterministic. Headerless graphs are skipped with a
    /// warning. Returns the number of indexed ids.
    pub fn rescan(&self) -> Result<usize> {
        let mut names = self.store.names()?;
        names.sort();

        let mut index: HashMap<String, String> = HashMap::new();
        for name in names {
            let graph = self.store.open(&name)?;
            let Some(header) = ont_header(&graph) else {
                warn!(%name, "stored graph has no ontology header, skipping");
                continue;
            };
            for id in header.iri.iter().chain(header.version_iri.iter()) {
                index.entry(id.clone()).or_insert_with(|| name.clone());
            }
        }
        debug!(ids = index.len(), "rescanned store");

        let count = index.len();
        *self.index.write().unwrap() = index;
        Ok(count)
    }

    /// Open the stored graph whose ontology header declares `id`.
    pub fn get(&self, id: &str) -> Result<GraphRef> {
        let name = self
            .index
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::does_not_exist(id))?;
        self.store.open(&name)
    }

    /// Whether `id` currently resolves.
    pub fn has(&self, id: &str) -> bool {
        self.index.read().unwrap().contains_key(id)
    }

    /// All resolvable ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.index.read().unwrap().keys().cloned().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontograph_core::{MemoryGraph, Node, Triple};
    use ontograph_vocab::{owl, rdf};
    use std::collections::BTreeMap;

    /// Store over a fixed name -> graph map.
    struct MapStore {
        graphs: RwLock<BTreeMap<String, GraphRef>>,
    }

    impl MapStore {
        fn new() -> Arc<Self> {
            Arc::new(MapStore {
                graphs: RwLock::new(BTreeMap::new()),
            })
        }

        fn insert(&self, name: &str, graph: GraphRef) {
            self.graphs
                .write()
                .unwrap()
                .insert(name.to_string(), graph);
        }
    }

    impl GraphStore for MapStore {
        fn open(&self, name: &str) -> Result<GraphRef> {
            self.graphs
                .read()
                .unwrap()
                .get(name)
                .cloned()
                .ok_or_else(|| Error::store(format!("no stored graph '{}'", name)))
        }

        fn names(&self) -> Result<Vec<String>> {
            Ok(self.graphs.read().unwrap().keys().cloned().collect())
        }
    }

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

    #[test]
    fn test_rescan_indexes_headers() {
        let store = MapStore::new();
        store.insert("g1", ontology_graph("http://e.org/ont/a"));
        store.insert("g2", ontology_graph("http://e.org/ont/b"));
        // Headerless graph is skipped.
        store.insert("g3", MemoryGraph::new());

        let repo = StoreGraphRepository::new(store);
        assert_eq!(repo.rescan().unwrap(), 2);
        assert_eq!(
            repo.ids(),
            vec![
                "http://e.org/ont/a".to_string(),
                "http://e.org/ont/b".to_string()
            ]
        );
        assert!(repo.has("http://e.org/ont/a"));
        assert!(repo.get("http://e.org/ont/a").is_ok());
        assert!(matches!(
            repo.get("http://e.org/ont/c"),
            Err(Error::DoesNotExist(_))
        ));
    }

    #[test]
    fn test_header_change_remaps_id() {
        let store = MapStore::new();
        let g = ontology_graph("http://e.org/ont/old");
        store.insert("g1", g.clone());

        let repo = StoreGraphRepository::new(store.clone());
        repo.rescan().unwrap();
        assert!(repo.has("http://e.org/ont/old"));

        // Rename the ontology in place.
        g.delete(&Triple::new(
            Node::iri("http://e.org/ont/old"),
            Node::iri(rdf::TYPE),
            Node::iri(owl::ONTOLOGY),
        ))
        .unwrap();
        g.add(Triple::new(
            Node::iri("http://e.org/ont/new"),
            Node::iri(rdf::TYPE),
            Node::iri(owl::ONTOLOGY),
        ))
        .unwrap();

        repo.rescan().unwrap();
        assert!(!repo.has("http://e.org/ont/old"));
        let resolved = repo.get("http://e.org/ont/new").unwrap();
        assert!(ontograph_core::same_graph(&g, &resolved));
    }

    #[test]
    fn test_before_rescan_nothing_resolves() {
        let store = MapStore::new();
        store.insert("g1", ontology_graph("http://e.org/ont/a"));
        let repo = StoreGraphRepository::new(store);
        assert!(repo.ids().is_empty());
        assert!(matches!(
            repo.get("http://e.org/ont/a"),
            Err(Error::DoesNotExist(_))
        ));
    }
}
