//! Error codes for the memory-match API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Game rules
    /// Region or custom list has fewer entries than the pair count
    InsufficientEntries,
    /// Card-id pair is malformed, unknown, identical or already matched
    InvalidMove,

    // Request Validation
    /// Region string not recognised
    UnknownRegion,
    /// Pair count out of range
    InvalidPairCount,
    /// Custom entry missing a name or image
    InvalidEntry,
    /// Custom entries with the same name
    DuplicateEntry,
    /// Deck requested from no entries
    EmptyDeck,
    /// Malformed request body
    BadRequest,

    // Resource Not Found
    /// Session not found
    SessionNotFound,
    /// Unmatched route
    NotFound,

    // System Errors
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InsufficientEntries => "INSUFFICIENT_ENTRIES",
            Self::InvalidMove => "INVALID_MOVE",

            Self::UnknownRegion => "UNKNOWN_REGION",
            Self::InvalidPairCount => "INVALID_PAIR_COUNT",
            Self::InvalidEntry => "INVALID_ENTRY",
            Self::DuplicateEntry => "DUPLICATE_ENTRY",
            Self::EmptyDeck => "EMPTY_DECK",
            Self::BadRequest => "BAD_REQUEST",

            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
