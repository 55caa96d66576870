//! Map-backed graph repository.
//!
//! Caches graphs by id, with an optional location table and loader seam
//! for lazy resolution: a `get` miss consults the location mapping and,
//! when a [`GraphSource`] is attached, loads and caches the graph before
//! returning it.
//!
//! # Invariants
//!
//! - `ids()` reports every id the repository can currently serve: cached
//!   graphs plus mapped-but-unloaded locations (when a source is attached).
//! - A repository built with `require_union` holds union graphs only;
//!   `put` rejects anything else before touching the cache.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use ontograph_core::GraphRef;

use crate::config::RepositoryConfig;
use crate::error::{Error, Result};
use crate::source::GraphSource;

/// In-memory repository of graphs keyed by id.
pub struct MemoryGraphRepository {
    graphs: RwLock<HashMap<String, GraphRef>>,
    locations: RwLock<HashMap<String, String>>,
    source: Option<Arc<dyn GraphSource>>,
    config: RepositoryConfig,
}

impl MemoryGraphRepository {
    /// Empty repository with no loader and default options.
    pub fn new() -> Self {
        Self::with_config(RepositoryConfig::new())
    }

    /// Empty repository with explicit options.
    pub fn with_config(config: RepositoryConfig) -> Self {
        MemoryGraphRepository {
            graphs: RwLock::new(HashMap::new()),
            locations: RwLock::new(HashMap::new()),
            source: None,
            config,
        }
    }

    /// Attach a loader used to resolve mapped locations on `get` misses.
    pub fn with_source(mut self, source: Arc<dyn GraphSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// The graph under `id`, loading through the source when only a
    /// location mapping exists.
    pub fn get(&self, id: &str) -> Result<GraphRef> {
        if let Some(g) = self.graphs.read().unwrap().get(id) {
            return Ok(g.clone());
        }
        let location = self.locations.read().unwrap().get(id).cloned();
        if let (Some(location), Some(source)) = (location, self.source.as_ref()) {
            let graph = source.load(&location)?;
            self.check_shape(&graph)?;
            debug!(id, %location, "loaded graph into repository");
            self.graphs
                .write()
                .unwrap()
                .insert(id.to_string(), graph.clone());
            return Ok(graph);
        }
        Err(Error::does_not_exist(id))
    }

    /// Register `graph` under `id`, returning the graph it displaced.
    pub fn put(&self, id: impl Into<String>, graph: GraphRef) -> Result<Option<GraphRef>> {
        self.check_shape(&graph)?;
        let id = id.into();
        debug!(%id, "registered graph");
        Ok(self.graphs.write().unwrap().insert(id, graph))
    }

    /// Drop the graph under `id` and return it.
    pub fn remove(&self, id: &str) -> Result<GraphRef> {
        self.graphs
            .write()
            .unwrap()
            .remove(id)
            .ok_or_else(|| Error::does_not_exist(id))
    }

    /// Map `id` to a loader location. Fails when the id is already mapped.
    pub fn add_mapping(&self, id: impl Into<String>, location: impl Into<String>) -> Result<()> {
        let id = id.into();
        let mut locations = self.locations.write().unwrap();
        if locations.contains_key(&id) {
            return Err(Error::already_exists(id));
        }
        locations.insert(id, location.into());
        Ok(())
    }

    /// Drop the location mapping for `id`, if any. Cached graphs stay.
    pub fn remove_mapping(&self, id: &str) -> Option<String> {
        self.locations.write().unwrap().remove(id)
    }

    /// Every id this repository can serve, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.graphs.read().unwrap().keys().cloned().collect();
        if self.source.is_some() {
            ids.extend(self.locations.read().unwrap().keys().cloned());
        }
        ids.sort();
        ids.dedup();
        ids
    }

    /// Number of cached graphs.
    pub fn len(&self) -> usize {
        self.graphs.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.read().unwrap().is_empty()
    }

    /// Drop every cached graph and mapping.
    pub fn clear(&self) {
        self.graphs.write().unwrap().clear();
        self.locations.write().unwrap().clear();
    }

    fn check_shape(&self, graph: &GraphRef) -> Result<()> {
        if self.config.require_union && graph.as_union().is_none() {
            return Err(Error::invalid_graph(
                "repository accepts union graphs only",
            ));
        }
        Ok(())
    }
}

impl Default for MemoryGraphRepository {
    fn default() -> Self {
        Self::new()
    }
}
