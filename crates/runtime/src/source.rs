//! Record source decorator that caches fetched records in the key-value store.

use std::sync::Arc;

use pocket_core::{AttributeRecord, RecordKey, RecordSource, RecordSummary, SourceError};

use crate::repository::KeyValueStore;

/// Wraps any [`RecordSource`], keeping fetched records under `record:<id>` and
/// `record-name:<name>`.
///
/// Cache read or write failures are logged and fall through to the inner source;
/// they never fail a fetch.
pub struct CachedSource<S> {
    inner: S,
    cache: Arc<dyn KeyValueStore>,
}

impl<S: RecordSource> CachedSource<S> {
    pub fn new(inner: S, cache: Arc<dyn KeyValueStore>) -> Self {
        Self { inner, cache }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn cache_key(key: &RecordKey) -> String {
        match key {
            RecordKey::Id(id) => format!("record:{}", id.0),
            RecordKey::Name(name) => format!("record-name:{}", name.trim().to_ascii_lowercase()),
        }
    }

    fn cached(&self, key: &RecordKey) -> Option<AttributeRecord> {
        let cache_key = Self::cache_key(key);
        let bytes = match self.cache.get(&cache_key) {
            Ok(bytes) => bytes?,
            Err(err) => {
                tracing::warn!("Record cache read failed for {}: {}", cache_key, err);
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!("Discarding unreadable cache entry {}: {}", cache_key, err);
                None
            }
        }
    }

    fn store(&self, record: &AttributeRecord) {
        let bytes = match serde_json::to_vec(record) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!("Failed to encode {} for the cache: {}", record.id, err);
                return;
            }
        };
        for key in [
            RecordKey::Id(record.id),
            RecordKey::Name(record.name.clone()),
        ] {
            let cache_key = Self::cache_key(&key);
            if let Err(err) = self.cache.put(&cache_key, &bytes) {
                tracing::warn!("Record cache write failed for {}: {}", cache_key, err);
            }
        }
    }
}

impl<S: RecordSource> RecordSource for CachedSource<S> {
    fn fetch(&self, key: &RecordKey) -> Result<AttributeRecord, SourceError> {
        if let Some(record) = self.cached(key) {
            tracing::debug!("Record cache hit for {}", key);
            return Ok(record);
        }

        let record = self.inner.fetch(key)?;
        self.store(&record);
        Ok(record)
    }

    fn page(&self, offset: usize, limit: usize) -> Result<Vec<RecordSummary>, SourceError> {
        self.inner.page(offset, limit)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pocket_core::{RecordId, StaticSource};

    use super::*;
    use crate::repository::InMemoryStore;

    struct Counting {
        inner: StaticSource,
        calls: AtomicUsize,
    }

    impl RecordSource for Counting {
        fn fetch(&self, key: &RecordKey) -> Result<AttributeRecord, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch(key)
        }

        fn page(&self, offset: usize, limit: usize) -> Result<Vec<RecordSummary>, SourceError> {
            self.inner.page(offset, limit)
        }
    }

    fn cached() -> CachedSource<Counting> {
        let inner = Counting {
            inner: StaticSource::new(vec![AttributeRecord::new(25, "Pikachu", 4, 60)]),
            calls: AtomicUsize::new(0),
        };
        CachedSource::new(inner, Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn second_fetch_hits_the_cache_by_id_or_name() {
        let source = cached();
        source.fetch(&RecordKey::id(25)).unwrap();
        source.fetch(&RecordKey::id(25)).unwrap();
        let by_name = source.fetch(&RecordKey::name("PIKACHU")).unwrap();
        assert_eq!(by_name.id, RecordId(25));
        assert_eq!(source.inner().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn misses_are_not_cached() {
        let source = cached();
        assert!(source.fetch(&RecordKey::id(1)).is_err());
        assert!(source.fetch(&RecordKey::id(1)).is_err());
        assert_eq!(source.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unreadable_entries_fall_through() {
        let store = Arc::new(InMemoryStore::new());
        store.put("record:25", b"garbage").unwrap();
        let source = CachedSource::new(
            StaticSource::new(vec![AttributeRecord::new(25, "Pikachu", 4, 60)]),
            store,
        );
        assert_eq!(source.fetch(&RecordKey::id(25)).unwrap().name, "Pikachu");
    }
}
