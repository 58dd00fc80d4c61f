//! Record source errors.

use crate::error::{ErrorSeverity, GameError};

use super::source::RecordKey;

/// A record could not be supplied by a [`RecordSource`](super::RecordSource).
///
/// The core never retries; callers surface this as "record unavailable".
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// No record matches the key.
    #[error("record {0} not found")]
    NotFound(RecordKey),

    /// The source could not be reached or failed while answering.
    #[error("record source unavailable: {0}")]
    Unavailable(String),

    /// The source answered with data that could not be decoded.
    #[error("malformed record data: {0}")]
    Malformed(String),
}

impl GameError for SourceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) => ErrorSeverity::Validation,
            Self::Unavailable(_) => ErrorSeverity::Recoverable,
            Self::Malformed(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "SOURCE_RECORD_NOT_FOUND",
            Self::Unavailable(_) => "SOURCE_UNAVAILABLE",
            Self::Malformed(_) => "SOURCE_MALFORMED",
        }
    }
}
