//! Composition root for one command invocation.

use std::sync::Arc;

use anyhow::{Context, Result};
use pocket_content::{BundledDataset, ConfigLoader};
use pocket_core::{PcgRng, PocketConfig, RngOracle, RollHistory};
use pocket_runtime::{CachedSource, KeyValueStore, RosterStore, RuntimeConfig};

/// Everything a command needs: rules, records, persistence, and the roster.
pub struct App {
    pub config: PocketConfig,
    pub records: CachedSource<BundledDataset>,
    pub roster: RosterStore,
    pub rng: Arc<dyn RngOracle>,
    store: Arc<dyn KeyValueStore>,
}

impl App {
    pub const ROLL_HISTORY_KEY: &'static str = "roll-history";

    /// Loads rules and records (from the configured paths, or the copies built
    /// into the binary) and opens the configured store.
    pub fn build(runtime: &RuntimeConfig) -> Result<Self> {
        let config = match &runtime.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => ConfigLoader::embedded()?,
        };
        let dataset = match &runtime.dataset_path {
            Some(path) => BundledDataset::load(path)?,
            None => BundledDataset::embedded()?,
        };
        let store = runtime
            .open_store()
            .with_context(|| format!("Failed to open store in {}", runtime.data_dir.display()))?;

        tracing::debug!("Loaded {} records", dataset.len());

        Ok(Self::new(config, dataset, store, runtime.roster_seed))
    }

    pub fn new(
        config: PocketConfig,
        dataset: BundledDataset,
        store: Arc<dyn KeyValueStore>,
        roster_seed: Option<u64>,
    ) -> Self {
        let rng: Arc<dyn RngOracle> = Arc::new(PcgRng);

        let mut roster = RosterStore::new(store.clone(), config.clone()).with_rng(rng.clone());
        if let Some(seed) = roster_seed {
            roster = roster.with_seed(seed);
        }

        Self {
            config,
            records: CachedSource::new(dataset, store.clone()),
            roster,
            rng,
            store,
        }
    }

    /// Last rolls, or an empty history if none were stored or the blob is unreadable.
    pub fn roll_history(&self) -> RollHistory {
        match self.store.get(Self::ROLL_HISTORY_KEY) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
                tracing::warn!("Discarding unreadable roll history: {}", err);
                RollHistory::new()
            }),
            Ok(None) => RollHistory::new(),
            Err(err) => {
                tracing::warn!("Failed to read roll history: {}", err);
                RollHistory::new()
            }
        }
    }

    pub fn save_roll_history(&self, history: &RollHistory) -> Result<()> {
        let bytes = serde_json::to_vec(history)?;
        self.store.put(Self::ROLL_HISTORY_KEY, &bytes)?;
        Ok(())
    }
}
