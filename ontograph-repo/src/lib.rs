//! Graph repositories for the ontograph ontology layer.
//!
//! Two repository shapes over the same idea — resolving graph ids to
//! [`GraphRef`]s:
//!
//! - [`MemoryGraphRepository`]: a map from explicit ids, with an optional
//!   location table and [`GraphSource`] loader for lazy resolution.
//! - [`StoreGraphRepository`]: ids are ontology IRIs read out of a
//!   [`GraphStore`]'s graphs; [`rescan`](StoreGraphRepository::rescan)
//!   keeps the index in step with the store.
//!
//! Retrieval, parsing, and persistence stay behind the `GraphSource` /
//! `GraphStore` seams; this crate never does I/O itself.

pub mod config;
pub mod error;
pub mod memory;
pub mod source;
pub mod store;

pub use config::RepositoryConfig;
pub use error::{Error, Result};
pub use memory::MemoryGraphRepository;
pub use source::{GraphSource, GraphStore};
pub use store::StoreGraphRepository;
