//! Runtime services for the pocket party manager.
//!
//! This crate wires the pure rules in `pocket-core` to persistence:
//! - [`repository`] holds the key-value store port and its memory/file adapters
//! - [`roster`] hosts [`RosterStore`], the sole mutator of the persisted roster
//! - [`source`] decorates record sources with a persistent cache
//! - [`config`] reads [`RuntimeConfig`] from the environment
pub mod config;
pub mod repository;
pub mod roster;
pub mod source;

pub use config::{PersistenceKind, RuntimeConfig};
pub use repository::{
    FileStore, InMemoryStore, KeyValueStore, RepositoryError, RosterSnapshot,
};
pub use roster::{Clock, RosterError, RosterStore};
pub use source::CachedSource;
