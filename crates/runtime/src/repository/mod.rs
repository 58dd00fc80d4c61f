//! Repository layer for persisted runtime data.
//!
//! Everything the runtime persists goes through one [`KeyValueStore`]:
//! - The roster, as a versioned [`RosterSnapshot`]
//! - Cached creature records fetched from a record source
//!
//! Creature records themselves are content, not repository data.

mod error;
mod file;
mod memory;
mod snapshot;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use snapshot::RosterSnapshot;
pub use traits::KeyValueStore;
