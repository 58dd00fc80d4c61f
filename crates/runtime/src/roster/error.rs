//! Roster operation failures.

use pocket_core::{ErrorSeverity, GameError, MoveSetError, RecordId, SourceError};
use thiserror::Error;

use crate::repository::RepositoryError;

/// Every failing roster operation leaves the roster unchanged.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster is full ({max} entries)")]
    RosterFull { max: usize },

    #[error("{0} is already in the roster")]
    DuplicateEntry(RecordId),

    #[error("{0} is not in the roster")]
    NotFound(RecordId),

    #[error("{0} has no evolution")]
    NoEvolution(RecordId),

    #[error("record unavailable: {0}")]
    RecordUnavailable(#[from] SourceError),

    #[error(transparent)]
    MoveSet(#[from] MoveSetError),

    #[error("failed to persist roster: {0}")]
    Persistence(#[from] RepositoryError),
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RosterFull { .. }
            | Self::DuplicateEntry(_)
            | Self::NotFound(_)
            | Self::NoEvolution(_) => ErrorSeverity::Validation,
            Self::RecordUnavailable(err) => err.severity(),
            Self::MoveSet(err) => err.severity(),
            Self::Persistence(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RosterFull { .. } => "ROSTER_FULL",
            Self::DuplicateEntry(_) => "ROSTER_DUPLICATE_ENTRY",
            Self::NotFound(_) => "ROSTER_NOT_FOUND",
            Self::NoEvolution(_) => "ROSTER_NO_EVOLUTION",
            Self::RecordUnavailable(_) => "ROSTER_RECORD_UNAVAILABLE",
            Self::MoveSet(err) => err.error_code(),
            Self::Persistence(err) => err.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
