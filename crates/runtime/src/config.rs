//! Runtime configuration loaded from the environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use directories::ProjectDirs;

use crate::repository::{FileStore, InMemoryStore, KeyValueStore, Result};

/// Where the roster and record cache are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PersistenceKind {
    /// Files under the data directory.
    #[default]
    File,
    /// Process memory only; nothing survives exit.
    Memory,
}

impl FromStr for PersistenceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown persistence kind '{other}'")),
        }
    }
}

/// Paths and seeds needed to assemble a runtime.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub data_dir: PathBuf,
    /// Fixed roster seed; `None` keeps the persisted seed or draws a new one.
    pub roster_seed: Option<u64>,
    /// Bundled dataset path; defaults to `creatures.json` in the content directory.
    pub dataset_path: Option<PathBuf>,
    /// Rules file; defaults to `config.toml` in the content directory.
    pub config_path: Option<PathBuf>,
    pub persistence: PersistenceKind,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            roster_seed: None,
            dataset_path: None,
            config_path: None,
            persistence: PersistenceKind::default(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `POCKET_DATA_DIR`
    /// - `POCKET_ROSTER_SEED`
    /// - `POCKET_DATASET`
    /// - `POCKET_CONFIG`
    /// - `POCKET_PERSISTENCE` (`file` or `memory`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("POCKET_DATA_DIR") {
            config.data_dir = dir;
        }

        config.roster_seed = read_env::<u64>("POCKET_ROSTER_SEED");
        config.dataset_path = read_env::<PathBuf>("POCKET_DATASET");
        config.config_path = read_env::<PathBuf>("POCKET_CONFIG");

        if let Some(kind) = read_env::<PersistenceKind>("POCKET_PERSISTENCE") {
            config.persistence = kind;
        }

        config
    }

    /// Directory holding persisted blobs.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }

    pub fn open_store(&self) -> Result<Arc<dyn KeyValueStore>> {
        Ok(match self.persistence {
            PersistenceKind::File => Arc::new(FileStore::new(self.store_dir())?),
            PersistenceKind::Memory => Arc::new(InMemoryStore::new()),
        })
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "pocket")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".pocket"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}
