//! Content loaders for reading data files.
//!
//! Records are read from JSON, configuration from TOML.

pub mod config;
pub mod dataset;
pub mod factory;
pub mod records;

pub use config::ConfigLoader;
pub use dataset::BundledDataset;
pub use factory::ContentFactory;
pub use records::{RawCreature, RecordLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
