//! Common error infrastructure for pocket-core.
//!
//! This module provides shared types and traits used across all error types in the
//! workspace. Domain-specific errors (e.g., [`MoveSetError`](crate::MoveSetError),
//! [`SourceError`](crate::SourceError)) are defined next to the operations that
//! raise them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation family has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized so callers can decide how to surface them
//! - **Stable Codes**: Every variant maps to a static code for logs and tests

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed on retry
/// - **Validation**: Invalid input or a conflicting request, rejected without mutation
/// - **Internal**: Unexpected inconsistencies that require investigation
/// - **Fatal**: Unrecoverable failures (e.g., the persistence layer is unusable)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same or an alternative request.
    ///
    /// Examples: record source temporarily unreachable
    Recoverable,

    /// Validation error - the request conflicts with current state.
    ///
    /// Examples: roster full, duplicate entry, move not unlocked
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - cannot continue.
    ///
    /// Examples: persistence lock poisoned, storage directory unusable
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or unusable environment.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all pocket errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
