// Unit tests for error mapping - pure domain errors into HTTP-facing AppError
use crate::errors::domain::{DomainError, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_insufficient_entries_to_400() {
    let app: AppError = DomainError::insufficient_entries("need 8, have 5").into();
    assert_eq!(app.code(), ErrorCode::InsufficientEntries);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.detail(), "need 8, have 5");
}

#[test]
fn maps_session_not_found_to_404() {
    let app: AppError = DomainError::session_not_found("abc").into();
    assert_eq!(app.code().as_str(), "SESSION_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
    assert!(app.detail().contains("not found"));
}

#[test]
fn maps_invalid_move_to_400() {
    let app: AppError = DomainError::invalid_move("identical cards").into();
    assert_eq!(app.code(), ErrorCode::InvalidMove);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_validation_kinds() {
    let cases = [
        (ValidationKind::UnknownRegion, "UNKNOWN_REGION"),
        (ValidationKind::InvalidPairCount, "INVALID_PAIR_COUNT"),
        (ValidationKind::InvalidEntry, "INVALID_ENTRY"),
        (ValidationKind::DuplicateEntry, "DUPLICATE_ENTRY"),
        (ValidationKind::EmptyDeck, "EMPTY_DECK"),
    ];

    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "bad").into();
        assert_eq!(app.code().as_str(), code);
        assert_eq!(app.status().as_u16(), 400);
    }
}

#[test]
fn domain_detail_strips_prefix() {
    let de = DomainError::invalid_move("cards already matched");
    assert_eq!(de.detail(), "cards already matched");
    assert_eq!(de.to_string(), "invalid move: cards already matched");
}
