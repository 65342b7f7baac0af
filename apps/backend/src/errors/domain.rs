//! Domain-level error type used by the catalog, deck, pairing and session
//! layers.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through `From<DomainError> for AppError`.

use thiserror::Error;

/// Validation failures that are not one of the core game errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Region string is not a known region or `custom`
    UnknownRegion,
    /// Requested pair count is zero or above the configured maximum
    InvalidPairCount,
    /// Custom entry with a blank name or image reference
    InvalidEntry,
    /// Two custom entries share a name
    DuplicateEntry,
    /// Deck requested from an empty entry list
    EmptyDeck,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Region slice or custom list cannot satisfy the required pair count
    #[error("insufficient entries: {0}")]
    InsufficientEntries(String),
    /// No session exists for the given id
    #[error("session not found: {0}")]
    SessionNotFound(String),
    /// Malformed or illegal card-id pair
    #[error("invalid move: {0}")]
    InvalidMove(String),
    /// Input validation failure
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
}

impl DomainError {
    pub fn insufficient_entries(detail: impl Into<String>) -> Self {
        Self::InsufficientEntries(detail.into())
    }

    pub fn session_not_found(session_id: &str) -> Self {
        Self::SessionNotFound(format!("Session {session_id} not found"))
    }

    pub fn invalid_move(detail: impl Into<String>) -> Self {
        Self::InvalidMove(detail.into())
    }

    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    /// Human-readable message without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::InsufficientEntries(d)
            | Self::SessionNotFound(d)
            | Self::InvalidMove(d)
            | Self::Validation(_, d) => d,
        }
    }
}
