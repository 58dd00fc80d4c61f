//! Read-only access to creature records (remote service, bundled dataset, cache).

use std::fmt;
use std::str::FromStr;

use crate::record::{AttributeRecord, RecordId};

use super::error::SourceError;

/// Lookup key: numeric id or case-insensitive name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordKey {
    Id(RecordId),
    Name(String),
}

impl RecordKey {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub const fn id(id: u32) -> Self {
        Self::Id(RecordId(id))
    }

    pub fn matches(&self, record: &AttributeRecord) -> bool {
        match self {
            Self::Id(id) => record.id == *id,
            Self::Name(name) => record.matches_name(name),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// Digits parse as an id, anything else as a name.
impl FromStr for RecordKey {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<u32>() {
            Ok(id) => Self::id(id),
            Err(_) => Self::name(trimmed.to_ascii_lowercase()),
        })
    }
}

/// One line of a paged listing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordSummary {
    pub id: RecordId,
    pub name: String,
}

impl From<&AttributeRecord> for RecordSummary {
    fn from(record: &AttributeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
        }
    }
}

/// Supplier of immutable attribute records.
///
/// Implementations may block on I/O; the core itself never calls a source from
/// inside a pure function.
pub trait RecordSource: Send + Sync {
    fn fetch(&self, key: &RecordKey) -> Result<AttributeRecord, SourceError>;

    /// Summaries for `limit` records starting at `offset`, ordered by id.
    fn page(&self, offset: usize, limit: usize) -> Result<Vec<RecordSummary>, SourceError>;
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn fetch(&self, key: &RecordKey) -> Result<AttributeRecord, SourceError> {
        (**self).fetch(key)
    }

    fn page(&self, offset: usize, limit: usize) -> Result<Vec<RecordSummary>, SourceError> {
        (**self).page(offset, limit)
    }
}

/// In-memory source over a fixed list of records.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    records: Vec<AttributeRecord>,
}

impl StaticSource {
    pub fn new(mut records: Vec<AttributeRecord>) -> Self {
        records.sort_by_key(|record| record.id);
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AttributeRecord] {
        &self.records
    }
}

impl RecordSource for StaticSource {
    fn fetch(&self, key: &RecordKey) -> Result<AttributeRecord, SourceError> {
        self.records
            .iter()
            .find(|record| key.matches(record))
            .cloned()
            .ok_or_else(|| SourceError::NotFound(key.clone()))
    }

    fn page(&self, offset: usize, limit: usize) -> Result<Vec<RecordSummary>, SourceError> {
        Ok(self
            .records
            .iter()
            .skip(offset)
            .take(limit)
            .map(RecordSummary::from)
            .collect())
    }
}
