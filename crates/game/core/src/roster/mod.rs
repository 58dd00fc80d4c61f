//! Roster entry lifecycle: creation from a record, experience and level changes,
//! move selection, HP, and conditions.
//!
//! Persistence and the capacity/uniqueness rules of the roster as a whole live in
//! the runtime's `RosterStore`; this module only owns single-entry invariants.
mod entry;
mod error;
mod experience;
mod moves;

pub use entry::{EntryFactory, REDUCED_STAT_PENALTY, RosterEntry, apply_jitter};
pub use error::{EntryError, MoveSetError};
pub use experience::{ExperienceOutcome, LevelMessage};
pub use moves::{MoveSet, is_unlocked, unlocked_at};
