//! The persisted party roster.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use pocket_core::{
    AttributeRecord, Condition, EntryFactory, ExperienceOutcome, PcgRng, Personality,
    PocketConfig, RecordId, RecordKey, RecordSource, RngOracle, RosterEntry,
};

use crate::repository::{KeyValueStore, RepositoryError, RosterSnapshot};

use super::error::{Result, RosterError};

/// Milliseconds since the Unix epoch.
pub type Clock = Box<dyn Fn() -> i64 + Send + Sync>;

#[derive(Clone, Debug)]
struct RosterState {
    seed: u64,
    next_nonce: u64,
    entries: Vec<RosterEntry>,
}

impl RosterState {
    fn contains(&self, id: RecordId) -> bool {
        self.entries.iter().any(|entry| entry.id() == id)
    }

    fn position(&self, id: RecordId) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id() == id)
            .ok_or(RosterError::NotFound(id))
    }

    fn entry_mut(&mut self, id: RecordId) -> Result<&mut RosterEntry> {
        let idx = self.position(id)?;
        Ok(&mut self.entries[idx])
    }
}

/// CRUD over the roster with whole-roster persistence.
///
/// The roster is loaded lazily on first access; an absent or unreadable snapshot
/// yields an empty roster. Stored entries are re-validated on load and dropped if
/// they cannot be repaired. Each mutation runs against a working copy which is
/// persisted before it replaces the in-memory roster, so a failed operation
/// (including a failed write) leaves the roster unchanged.
pub struct RosterStore {
    store: Arc<dyn KeyValueStore>,
    config: PocketConfig,
    rng: Arc<dyn RngOracle>,
    configured_seed: Option<u64>,
    clock: Clock,
    state: RwLock<Option<RosterState>>,
}

impl RosterStore {
    pub fn new(store: Arc<dyn KeyValueStore>, config: PocketConfig) -> Self {
        Self {
            store,
            config,
            rng: Arc::new(PcgRng),
            configured_seed: None,
            clock: Box::new(|| chrono::Utc::now().timestamp_millis()),
            state: RwLock::new(None),
        }
    }

    /// Fixes the roster seed instead of using the persisted or a random one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.configured_seed = Some(seed);
        self
    }

    pub fn with_rng(mut self, rng: Arc<dyn RngOracle>) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_clock(mut self, clock: impl Fn() -> i64 + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &PocketConfig {
        &self.config
    }

    // ===== loading and persistence =====

    fn load(&self) -> RosterState {
        let snapshot = match self.store.get(RosterSnapshot::KEY) {
            Ok(Some(bytes)) => RosterSnapshot::decode(&bytes).unwrap_or_else(|err| {
                tracing::warn!("Stored roster unreadable, starting empty: {}", err);
                RosterSnapshot::default()
            }),
            Ok(None) => RosterSnapshot::default(),
            Err(err) => {
                tracing::warn!("Failed to read stored roster, starting empty: {}", err);
                RosterSnapshot::default()
            }
        };

        let mut entries: Vec<RosterEntry> = snapshot
            .entries
            .into_iter()
            .filter_map(|entry| {
                let id = entry.id();
                entry
                    .validated()
                    .map_err(|err| RepositoryError::CorruptedData(err.to_string()))
                    .inspect_err(|err| tracing::warn!("Dropping stored entry {}: {}", id, err))
                    .ok()
            })
            .collect();
        let mut seen = HashSet::new();
        entries.retain(|entry| seen.insert(entry.id()));
        if entries.len() > PocketConfig::MAX_ROSTER_SIZE {
            tracing::warn!(
                "Stored roster holds {} entries, keeping the first {}",
                entries.len(),
                PocketConfig::MAX_ROSTER_SIZE
            );
            entries.truncate(PocketConfig::MAX_ROSTER_SIZE);
        }

        let seed = self
            .configured_seed
            .or(snapshot.seed)
            .unwrap_or_else(rand::random::<u64>);

        tracing::debug!("Loaded roster with {} entries", entries.len());

        RosterState {
            seed,
            next_nonce: snapshot.next_nonce,
            entries,
        }
    }

    fn persist(&self, state: &RosterState) -> Result<()> {
        let snapshot = RosterSnapshot::new(state.seed, state.next_nonce, state.entries.clone());
        self.store.put(RosterSnapshot::KEY, &snapshot.encode()?)?;
        Ok(())
    }

    fn read<R>(&self, f: impl FnOnce(&RosterState) -> R) -> Result<R> {
        {
            let guard = self
                .state
                .read()
                .map_err(|_| RepositoryError::LockPoisoned)?;
            if let Some(state) = guard.as_ref() {
                return Ok(f(state));
            }
        }
        let mut guard = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let state = guard.get_or_insert_with(|| self.load());
        Ok(f(state))
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut RosterState) -> Result<R>) -> Result<R> {
        let mut guard = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let current = guard.get_or_insert_with(|| self.load());

        let mut next = current.clone();
        let out = f(&mut next)?;
        self.persist(&next)?;
        *current = next;

        Ok(out)
    }

    // ===== queries =====

    pub fn list(&self) -> Result<Vec<RosterEntry>> {
        self.read(|state| state.entries.clone())
    }

    pub fn get(&self, id: RecordId) -> Result<Option<RosterEntry>> {
        self.read(|state| state.entries.iter().find(|e| e.id() == id).cloned())
    }

    pub fn contains(&self, id: RecordId) -> Result<bool> {
        self.read(|state| state.contains(id))
    }

    pub fn len(&self) -> Result<usize> {
        self.read(|state| state.entries.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn is_full(&self) -> Result<bool> {
        Ok(self.len()? >= PocketConfig::MAX_ROSTER_SIZE)
    }

    /// Seed all entry draws derive from.
    pub fn seed(&self) -> Result<u64> {
        self.read(|state| state.seed)
    }

    // ===== membership =====

    /// Adds a new entry for `record` with a randomly drawn personality.
    pub fn add(&self, record: AttributeRecord) -> Result<RosterEntry> {
        self.insert(record.into_shared(), None)
    }

    pub fn add_with_personality(
        &self,
        record: AttributeRecord,
        personality: Personality,
    ) -> Result<RosterEntry> {
        self.insert(record.into_shared(), Some(personality))
    }

    /// Fetches the record from `source`, then adds it.
    pub fn add_from_source(&self, key: &RecordKey, source: &dyn RecordSource) -> Result<RosterEntry> {
        if self.is_full()? {
            return Err(RosterError::RosterFull {
                max: PocketConfig::MAX_ROSTER_SIZE,
            });
        }
        let record = source.fetch(key)?;
        self.add(record)
    }

    fn insert(
        &self,
        record: Arc<AttributeRecord>,
        personality: Option<Personality>,
    ) -> Result<RosterEntry> {
        let created_at = (self.clock)();

        let entry = self.mutate(|state| {
            if state.entries.len() >= PocketConfig::MAX_ROSTER_SIZE {
                return Err(RosterError::RosterFull {
                    max: PocketConfig::MAX_ROSTER_SIZE,
                });
            }
            if state.contains(record.id) {
                return Err(RosterError::DuplicateEntry(record.id));
            }

            let factory = EntryFactory::new(&self.config, self.rng.as_ref(), state.seed);
            let entry = factory.create(record, personality, state.next_nonce, created_at);
            state.next_nonce += 1;
            state.entries.push(entry.clone());
            Ok(entry)
        })?;

        tracing::info!(
            "Added {} {} to roster ({})",
            entry.id(),
            entry.name(),
            entry.personality()
        );
        Ok(entry)
    }

    pub fn remove(&self, id: RecordId) -> Result<RosterEntry> {
        let removed = self.mutate(|state| {
            let idx = state.position(id)?;
            Ok(state.entries.remove(idx))
        })?;

        tracing::info!("Removed {} {} from roster", id, removed.name());
        Ok(removed)
    }

    /// Replaces the stored entry with the same id (full replace, not merge).
    pub fn update(&self, entry: RosterEntry) -> Result<()> {
        let id = entry.id();
        self.mutate(|state| {
            *state.entry_mut(id)? = entry;
            Ok(())
        })?;

        tracing::debug!("Updated {}", id);
        Ok(())
    }

    // ===== entry edits =====

    /// Sets HP (clamped to `[0, max_hp]`).
    pub fn update_hp(&self, id: RecordId, hp: i32) -> Result<RosterEntry> {
        self.mutate(|state| {
            let entry = state.entry_mut(id)?;
            entry.set_hp(hp);
            Ok(entry.clone())
        })
    }

    pub fn apply_experience(
        &self,
        id: RecordId,
        delta: i64,
    ) -> Result<(RosterEntry, ExperienceOutcome)> {
        let (entry, outcome) = self.mutate(|state| {
            let entry = state.entry_mut(id)?;
            let outcome = entry.apply_experience(delta);
            Ok((entry.clone(), outcome))
        })?;

        if outcome.level_changed() {
            tracing::info!(
                "{} {}: level {} -> {} ({})",
                id,
                entry.name(),
                outcome.previous_level,
                outcome.level,
                outcome.message.text()
            );
        }
        Ok((entry, outcome))
    }

    pub fn set_moves(&self, id: RecordId, names: &[String]) -> Result<RosterEntry> {
        self.mutate(|state| {
            let entry = state.entry_mut(id)?;
            entry.set_moves(names)?;
            Ok(entry.clone())
        })
    }

    pub fn add_move(&self, id: RecordId, name: &str) -> Result<RosterEntry> {
        self.mutate(|state| {
            let entry = state.entry_mut(id)?;
            entry.add_move(name)?;
            Ok(entry.clone())
        })
    }

    /// Returns `false` if the move was not selected.
    pub fn remove_move(&self, id: RecordId, name: &str) -> Result<bool> {
        self.mutate(|state| Ok(state.entry_mut(id)?.remove_move(name)))
    }

    /// Returns `false` if the condition was already active.
    pub fn add_condition(&self, id: RecordId, condition: Condition) -> Result<bool> {
        self.mutate(|state| Ok(state.entry_mut(id)?.add_condition(condition)))
    }

    /// Returns `false` if the condition was not active.
    pub fn remove_condition(&self, id: RecordId, condition: Condition) -> Result<bool> {
        self.mutate(|state| Ok(state.entry_mut(id)?.remove_condition(condition)))
    }

    /// Replaces the entry with its evolved form, fetched from `source`.
    ///
    /// The evolved entry takes the target's id, so the target must not already be
    /// in the roster.
    pub fn evolve(&self, id: RecordId, source: &dyn RecordSource) -> Result<RosterEntry> {
        let current = self.get(id)?.ok_or(RosterError::NotFound(id))?;
        let link = current
            .record()
            .evolution
            .ok_or(RosterError::NoEvolution(id))?;
        let target = source.fetch(&RecordKey::Id(link.target))?.into_shared();

        let evolved = self.mutate(|state| {
            let idx = state.position(id)?;
            if link.target != id && state.contains(link.target) {
                return Err(RosterError::DuplicateEntry(link.target));
            }

            let factory = EntryFactory::new(&self.config, self.rng.as_ref(), state.seed);
            let evolved = factory.evolve(&state.entries[idx], target, state.next_nonce);
            state.next_nonce += 1;
            state.entries[idx] = evolved.clone();
            Ok(evolved)
        })?;

        tracing::info!("{} {} evolved into {} {}", id, current.name(), evolved.id(), evolved.name());
        Ok(evolved)
    }
}
