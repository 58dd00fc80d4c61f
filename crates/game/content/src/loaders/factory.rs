//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use pocket_core::PocketConfig;

use crate::loaders::{BundledDataset, ConfigLoader, LoadResult};

/// Loads content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// └── creatures.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const DATASET_FILE: &'static str = "creatures.json";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load rules from `config.toml`, or the defaults if it is absent.
    pub fn load_config(&self) -> LoadResult<PocketConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load the bundled dataset from `creatures.json`.
    pub fn load_dataset(&self) -> LoadResult<BundledDataset> {
        BundledDataset::load(&self.data_dir.join(Self::DATASET_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(ContentFactory::DATASET_FILE),
            r#"[{ "id": 7, "name": "squirtle", "height": 5, "weight": 90 }]"#,
        )
        .unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), PocketConfig::default());
        assert_eq!(factory.load_dataset().unwrap().len(), 1);
    }

    #[test]
    fn missing_dataset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ContentFactory::new(dir.path()).load_dataset().is_err());
    }
}
