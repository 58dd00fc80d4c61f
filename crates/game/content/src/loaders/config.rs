//! Conversion and roster rules loader.

use std::path::Path;

use pocket_core::PocketConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`PocketConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<PocketConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PocketConfig> {
        let config: PocketConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// Rules compiled into the binary from `data/config.toml`.
    pub fn embedded() -> LoadResult<PocketConfig> {
        Self::parse(include_str!("../../data/config.toml"))
    }

    /// Like [`load`](Self::load), but an absent file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<PocketConfig> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(PocketConfig::default())
        }
    }
}
