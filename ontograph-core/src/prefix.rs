//! Prefix mappings.
//!
//! A `PrefixMapping` is an ordered prefix → namespace table shared behind an
//! `Arc`. Read-only graph wrappers hand out *locked handles*: views that
//! share the same underlying table (so reads stay live) but reject mutation
//! with [`Error::LockedPrefixMapping`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::{Error, Result};

/// Ordered prefix → namespace mapping with a lock flag.
///
/// Insertion order is preserved; re-setting an existing prefix replaces its
/// namespace in place. Share via `Arc<PrefixMapping>`.
#[derive(Debug)]
pub struct PrefixMapping {
    entries: Arc<RwLock<Vec<(String, String)>>>,
    locked: AtomicBool,
}

impl Default for PrefixMapping {
    fn default() -> Self {
        PrefixMapping {
            entries: Arc::new(RwLock::new(Vec::new())),
            locked: AtomicBool::new(false),
        }
    }
}

impl PrefixMapping {
    /// Empty, unlocked mapping.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Mapping seeded with the standard rdf/rdfs/xsd/owl prefixes.
    pub fn with_standard_prefixes() -> Arc<Self> {
        let m = Self::default();
        {
            let mut entries = m.entries.write().unwrap();
            for (p, ns) in ontograph_vocab::ns::STANDARD_PREFIXES {
                entries.push((p.to_string(), ns.to_string()));
            }
        }
        Arc::new(m)
    }

    /// Register or replace a prefix. Fails on a locked mapping.
    pub fn set_prefix(&self, prefix: impl Into<String>, namespace: impl Into<String>) -> Result<()> {
        self.check_unlocked()?;
        let prefix = prefix.into();
        let namespace = namespace.into();
        let mut entries = self.entries.write().unwrap();
        if let Some(entry) = entries.iter_mut().find(|(p, _)| *p == prefix) {
            entry.1 = namespace;
        } else {
            entries.push((prefix, namespace));
        }
        Ok(())
    }

    /// Remove a prefix, returning its namespace if present. Fails on a
    /// locked mapping.
    pub fn remove_prefix(&self, prefix: &str) -> Result<Option<String>> {
        self.check_unlocked()?;
        let mut entries = self.entries.write().unwrap();
        let idx = entries.iter().position(|(p, _)| p == prefix);
        Ok(idx.map(|i| entries.remove(i).1))
    }

    /// Namespace registered for `prefix`.
    pub fn namespace_for(&self, prefix: &str) -> Option<String> {
        let entries = self.entries.read().unwrap();
        entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, ns)| ns.clone())
    }

    /// First prefix registered for `namespace`.
    pub fn prefix_for(&self, namespace: &str) -> Option<String> {
        let entries = self.entries.read().unwrap();
        entries
            .iter()
            .find(|(_, ns)| ns == namespace)
            .map(|(p, _)| p.clone())
    }

    /// Expand a `prefix:local` form to a full IRI.
    pub fn expand(&self, curie: &str) -> Option<String> {
        let (prefix, local) = curie.split_once(':')?;
        self.namespace_for(prefix).map(|ns| format!("{}{}", ns, local))
    }

    /// Shrink an IRI to `prefix:local` form using the longest matching
    /// namespace.
    pub fn shrink(&self, iri: &str) -> Option<String> {
        let entries = self.entries.read().unwrap();
        entries
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(p, ns)| format!("{}:{}", p, &iri[ns.len()..]))
    }

    /// Snapshot of all `(prefix, namespace)` pairs in insertion order.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.read().unwrap().clone()
    }

    /// Number of registered prefixes.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// True when no prefixes are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Irreversibly mark this mapping read-only.
    pub fn lock(&self) {
        self.locked.store(true, Ordering::SeqCst);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }

    /// A locked view over the same underlying table.
    ///
    /// Reads observe later changes made through the original handle;
    /// mutation through the view fails.
    pub fn locked_view(&self) -> Arc<PrefixMapping> {
        Arc::new(PrefixMapping {
            entries: self.entries.clone(),
            locked: AtomicBool::new(true),
        })
    }

    fn check_unlocked(&self) -> Result<()> {
        if self.is_locked() {
            Err(Error::locked_prefixes(
                "mutation attempted on a locked prefix mapping",
            ))
        } else {
            Ok(())
        }
    }
}
