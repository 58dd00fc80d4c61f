use std::sync::Arc;

use pocket_core::{
    AttributeRecord, Condition, LevelMessage, PocketConfig, RecordId, RecordKey, RosterEntry,
    SourceError, StaticSource,
};
use pocket_runtime::{
    FileStore, InMemoryStore, KeyValueStore, RosterError, RosterSnapshot, RosterStore,
};

const NOW: i64 = 1_700_000_000_000;

fn charmander() -> AttributeRecord {
    AttributeRecord::new(4, "charmander", 6, 85)
        .with_attribute("hp", 39)
        .with_attribute("attack", 52)
        .with_attribute("defense", 43)
        .with_attribute("special-attack", 60)
        .with_attribute("special-defense", 50)
        .with_attribute("speed", 65)
        .with_category("fire")
        .with_ability("scratch", 1)
        .with_ability("growl", 1)
        .with_ability("ember", 4)
        .with_ability("smokescreen", 8)
        .with_ability("dragon-breath", 12)
        .with_evolution(16, 5)
}

fn charmeleon() -> AttributeRecord {
    AttributeRecord::new(5, "charmeleon", 11, 190)
        .with_attribute("hp", 58)
        .with_attribute("speed", 80)
        .with_category("fire")
        .with_ability("scratch", 1)
        .with_ability("ember", 1)
        .with_ability("smokescreen", 12)
        .with_evolution(36, 6)
}

fn open(dir: &std::path::Path) -> (Arc<FileStore>, RosterStore) {
    let store = Arc::new(FileStore::new(dir).unwrap());
    let roster = RosterStore::new(store.clone(), PocketConfig::default()).with_clock(|| NOW);
    (store, roster)
}

/// Entries created by a throwaway roster, for writing crafted snapshots.
fn entries_for(records: impl IntoIterator<Item = AttributeRecord>) -> Vec<RosterEntry> {
    let roster = RosterStore::new(Arc::new(InMemoryStore::new()), PocketConfig::default())
        .with_seed(9)
        .with_clock(|| NOW);
    for record in records {
        roster.add(record).unwrap();
    }
    roster.list().unwrap()
}

fn write_snapshot(store: &FileStore, snapshot: &RosterSnapshot) {
    store
        .put(RosterSnapshot::KEY, &snapshot.encode().unwrap())
        .unwrap();
}

fn fillers(ids: std::ops::Range<u32>) -> Vec<AttributeRecord> {
    ids.map(|id| AttributeRecord::new(id, format!("filler-{id}"), 5, 50))
        .collect()
}

#[test]
fn roster_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let (_, roster) = open(dir.path());
    let roster = roster.with_seed(42);
    let added = roster.add(charmander()).unwrap();
    roster.add_condition(RecordId(4), Condition::Burned).unwrap();
    roster.update_hp(RecordId(4), 5).unwrap();
    drop(roster);

    let (_, reopened) = open(dir.path());
    assert_eq!(reopened.seed().unwrap(), 42);
    let entry = reopened.get(RecordId(4)).unwrap().unwrap();
    assert_eq!(entry.personality(), added.personality());
    assert_eq!(entry.actual_weight(), added.actual_weight());
    assert_eq!(entry.current_hp(), 5);
    assert!(entry.conditions().contains(Condition::Burned));
    assert_eq!(entry.created_at_ms(), NOW);
}

#[test]
fn same_seed_gives_same_draws() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    let (_, a) = open(first.path());
    let (_, b) = open(second.path());
    let a = a.with_seed(1234).add(charmander()).unwrap();
    let b = b.with_seed(1234).add(charmander()).unwrap();

    assert_eq!(a, b);
}

#[test]
fn unreadable_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let (store, roster) = open(dir.path());
    store.put(RosterSnapshot::KEY, b"definitely not json").unwrap();

    assert!(roster.is_empty().unwrap());
    roster.add(charmander()).unwrap();

    let bytes = store.get(RosterSnapshot::KEY).unwrap().unwrap();
    let snapshot = RosterSnapshot::decode(&bytes).unwrap();
    assert_eq!(snapshot.entries.len(), 1);
    assert_eq!(snapshot.next_nonce, 1);
}

#[test]
fn experience_drives_level_and_moves() {
    let dir = tempfile::tempdir().unwrap();
    let (_, roster) = open(dir.path());
    roster.add(charmander()).unwrap();

    let (entry, outcome) = roster.apply_experience(RecordId(4), 300).unwrap();
    assert_eq!(entry.level(), 2);
    assert_eq!(outcome.message, LevelMessage::LevelUp);
    assert!(!outcome.proficiency_changed);

    let (entry, outcome) = roster.apply_experience(RecordId(4), 14_000).unwrap();
    assert_eq!(entry.level(), 6);
    assert_eq!(entry.proficiency_bonus(), 3);
    assert!(outcome.proficiency_changed);
    assert!(outcome.evolution_ready);
    assert_eq!(outcome.message, LevelMessage::EvolutionReached);
    assert_eq!(entry.unlocked_abilities().len(), 4);

    roster.add_move(RecordId(4), "smokescreen").unwrap();

    let (entry, outcome) = roster.apply_experience(RecordId(4), -1_000_000).unwrap();
    assert_eq!(entry.experience(), 0);
    assert_eq!(entry.level(), 1);
    assert_eq!(outcome.message, LevelMessage::LevelDown);
    assert!(!entry.moves().contains("smokescreen"));
}

#[test]
fn evolve_replaces_entry_and_keeps_progress() {
    let dir = tempfile::tempdir().unwrap();
    let (_, roster) = open(dir.path());
    let source = StaticSource::new(vec![charmander(), charmeleon()]);

    roster.add_from_source(&RecordKey::Name("Charmander".into()), &source).unwrap();
    roster.apply_experience(RecordId(4), 14_300).unwrap();
    let before = roster.get(RecordId(4)).unwrap().unwrap();

    let evolved = roster.evolve(RecordId(4), &source).unwrap();
    assert_eq!(evolved.id(), RecordId(5));
    assert_eq!(evolved.level(), 6);
    assert_eq!(evolved.experience(), 14_300);
    assert_eq!(evolved.personality(), before.personality());
    assert_eq!(evolved.current_hp(), evolved.max_hp());
    assert_eq!(evolved.moves().iter().collect::<Vec<_>>(), ["scratch", "ember"]);

    assert!(!roster.contains(RecordId(4)).unwrap());
    assert!(roster.contains(RecordId(5)).unwrap());
    assert_eq!(roster.len().unwrap(), 1);

    // charizard is not in the source
    assert!(matches!(
        roster.evolve(RecordId(5), &source),
        Err(RosterError::RecordUnavailable(SourceError::NotFound(_)))
    ));
    assert!(roster.contains(RecordId(5)).unwrap());
}

#[test]
fn evolve_requires_an_evolution_and_a_free_slot() {
    let dir = tempfile::tempdir().unwrap();
    let (_, roster) = open(dir.path());
    let snorlax = AttributeRecord::new(143, "snorlax", 21, 4600).with_attribute("hp", 160);
    let source = StaticSource::new(vec![charmander(), charmeleon(), snorlax.clone()]);

    roster.add(snorlax).unwrap();
    assert!(matches!(
        roster.evolve(RecordId(143), &source),
        Err(RosterError::NoEvolution(RecordId(143)))
    ));

    roster.add(charmander()).unwrap();
    roster.add(charmeleon()).unwrap();
    assert!(matches!(
        roster.evolve(RecordId(4), &source),
        Err(RosterError::DuplicateEntry(RecordId(5)))
    ));
    assert_eq!(roster.len().unwrap(), 3);

    assert!(matches!(
        roster.evolve(RecordId(99), &source),
        Err(RosterError::NotFound(RecordId(99)))
    ));
}

#[test]
fn add_from_source_checks_capacity_first() {
    let dir = tempfile::tempdir().unwrap();
    let (_, roster) = open(dir.path());
    for id in 10..16 {
        roster
            .add(AttributeRecord::new(id, format!("filler-{id}"), 5, 50))
            .unwrap();
    }
    assert!(roster.is_full().unwrap());

    let source = StaticSource::new(vec![charmander()]);
    assert!(matches!(
        roster.add_from_source(&RecordKey::Id(RecordId(4)), &source),
        Err(RosterError::RosterFull { max: 6 })
    ));
    assert!(matches!(
        RosterStore::new(Arc::new(pocket_runtime::InMemoryStore::new()), PocketConfig::default())
            .add_from_source(&RecordKey::Id(RecordId(77)), &source),
        Err(RosterError::RecordUnavailable(_))
    ));
}

#[test]
fn stored_entries_are_repaired_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let (store, roster) = open(dir.path());
    roster.add(charmander()).unwrap();
    roster.add(charmeleon()).unwrap();
    drop(roster);

    let bytes = store.get(RosterSnapshot::KEY).unwrap().unwrap();
    let mut json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let tampered = &mut json["entries"][0];
    tampered["level"] = 99.into();
    tampered["current_hp"] = 999.into();
    tampered["moves"] = serde_json::json!(["hyper-beam"]);
    // charmeleon's entry now claims an id its record does not have
    json["entries"][1]["id"] = 77.into();
    store
        .put(RosterSnapshot::KEY, &serde_json::to_vec(&json).unwrap())
        .unwrap();

    let (_, reopened) = open(dir.path());
    let entries = reopened.list().unwrap();
    assert_eq!(entries.len(), 1);

    let entry = reopened.get(RecordId(4)).unwrap().unwrap();
    assert_eq!(entry.level(), 1);
    assert_eq!(entry.current_hp(), entry.max_hp());
    assert_eq!(entry.max_hp(), 13);
    assert!(entry.moves().is_empty());
    assert_eq!(entry.unlocked_abilities().len(), 3);
    assert!(!reopened.contains(RecordId(77)).unwrap());
}

#[test]
fn stored_duplicates_keep_the_first_entry() {
    let dir = tempfile::tempdir().unwrap();
    let (store, roster) = open(dir.path());

    let first = entries_for([charmander()]).remove(0);
    let mut second = first.clone();
    second.set_hp(1);
    write_snapshot(&store, &RosterSnapshot::new(9, 2, vec![first, second]));

    let entries = roster.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].current_hp(), 13);
}

#[test]
fn oversized_stored_roster_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let (store, roster) = open(dir.path());

    let mut entries = entries_for(fillers(10..16));
    entries.extend(entries_for(fillers(20..21)));
    assert_eq!(entries.len(), 7);
    write_snapshot(&store, &RosterSnapshot::new(9, 7, entries));

    let ids: Vec<u32> = roster.list().unwrap().iter().map(|e| e.id().0).collect();
    assert_eq!(ids, [10, 11, 12, 13, 14, 15]);
    assert!(roster.is_full().unwrap());
}

#[test]
fn unsupported_stored_version_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let (store, roster) = open(dir.path());

    let snapshot = RosterSnapshot {
        version: RosterSnapshot::CURRENT_VERSION + 1,
        ..RosterSnapshot::new(9, 1, entries_for([charmander()]))
    };
    write_snapshot(&store, &snapshot);

    assert!(roster.list().unwrap().is_empty());
    roster.add(charmeleon()).unwrap();
    let bytes = store.get(RosterSnapshot::KEY).unwrap().unwrap();
    let rewritten = RosterSnapshot::decode(&bytes).unwrap();
    assert_eq!(rewritten.version, RosterSnapshot::CURRENT_VERSION);
    assert_eq!(rewritten.entries.len(), 1);
}
