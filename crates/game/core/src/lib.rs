//! Deterministic conversion and roster rules for the pocket party manager.
//!
//! `pocket-core` turns immutable creature records into tabletop stats and owns the
//! lifecycle rules of a roster entry. Everything here is pure: records, seeds, and
//! timestamps are supplied by the caller, and the only outside-world seams are the
//! [`env::RecordSource`] and [`env::RngOracle`] traits.
pub mod conditions;
pub mod config;
pub mod dice;
pub mod env;
pub mod error;
pub mod personality;
pub mod record;
pub mod roster;
pub mod stats;
pub mod tables;

pub use conditions::{Condition, ConditionSet};
pub use config::PocketConfig;
pub use dice::{Die, Roll, RollHistory, roll};
pub use env::{
    PcgRng, RecordKey, RecordSource, RecordSummary, RngOracle, SourceError, StaticSource,
    compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use personality::Personality;
pub use record::{AttributeRecord, BaseAttribute, EvolutionLink, LevelGatedAbility, RecordId};
pub use roster::{
    EntryError, EntryFactory, ExperienceOutcome, LevelMessage, MoveSet, MoveSetError,
    RosterEntry,
};
pub use stats::{
    DerivedStats, HitDie, MovementWeightRule, StatBlock, StatConverter, StatKind, convert,
};
pub use tables::{Category, EffectivenessPolicy, EffectivenessProfile, energy_slots};
