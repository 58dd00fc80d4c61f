use crate::error::{ErrorSeverity, GameError};
use crate::record::RecordId;

/// A move-set edit was rejected. The move set is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveSetError {
    #[error("move '{0}' is not unlocked at the current level")]
    NotUnlocked(String),

    #[error("move set already holds {max} moves")]
    Full { max: usize },

    #[error("move '{0}' is already selected")]
    AlreadySelected(String),
}

impl GameError for MoveSetError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotUnlocked(_) => "MOVE_NOT_UNLOCKED",
            Self::Full { .. } => "MOVE_SET_FULL",
            Self::AlreadySelected(_) => "MOVE_ALREADY_SELECTED",
        }
    }
}

/// A roster entry built outside [`EntryFactory`](super::EntryFactory) cannot be
/// brought back within its invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("entry {entry} carries the record of {record}")]
    RecordMismatch { entry: RecordId, record: RecordId },

    #[error("entry {id} has negative maximum HP {max_hp}")]
    NegativeMaxHp { id: RecordId, max_hp: i32 },
}

impl GameError for EntryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RecordMismatch { .. } => "ENTRY_RECORD_MISMATCH",
            Self::NegativeMaxHp { .. } => "ENTRY_NEGATIVE_MAX_HP",
        }
    }
}
