//! Offline creature dataset.

use std::path::Path;

use pocket_core::{
    AttributeRecord, RecordKey, RecordSource, RecordSummary, SourceError, StaticSource,
};

use crate::loaders::{LoadResult, RecordLoader};

/// All bundled records, held in memory and served as a [`RecordSource`].
#[derive(Clone, Debug, Default)]
pub struct BundledDataset {
    records: StaticSource,
}

impl BundledDataset {
    pub fn new(records: Vec<AttributeRecord>) -> Self {
        Self {
            records: StaticSource::new(records),
        }
    }

    pub fn load(path: &Path) -> LoadResult<Self> {
        let records = RecordLoader::load(path)?;
        tracing::debug!(path = %path.display(), count = records.len(), "loaded bundled dataset");
        Ok(Self::new(records))
    }

    pub fn from_json(content: &str) -> LoadResult<Self> {
        Ok(Self::new(RecordLoader::parse(content)?))
    }

    /// The dataset compiled into the binary from `data/creatures.json`.
    pub fn embedded() -> LoadResult<Self> {
        Self::from_json(include_str!("../../data/creatures.json"))
            .map_err(|e| anyhow::anyhow!("Failed to parse embedded dataset: {}", e))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AttributeRecord] {
        self.records.records()
    }
}

impl RecordSource for BundledDataset {
    fn fetch(&self, key: &RecordKey) -> Result<AttributeRecord, SourceError> {
        self.records.fetch(key)
    }

    fn page(&self, offset: usize, limit: usize) -> Result<Vec<RecordSummary>, SourceError> {
        self.records.page(offset, limit)
    }
}
