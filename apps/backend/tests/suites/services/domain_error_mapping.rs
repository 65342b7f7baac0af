use actix_web::http::StatusCode;
use memory_backend::errors::domain::{DomainError, ValidationKind};
use memory_backend::errors::ErrorCode;
use memory_backend::AppError;

#[test]
fn every_domain_error_maps_to_a_stable_code_and_status() {
    let cases = [
        (
            DomainError::insufficient_entries("too few"),
            ErrorCode::InsufficientEntries,
            StatusCode::BAD_REQUEST,
        ),
        (
            DomainError::session_not_found("abc"),
            ErrorCode::SessionNotFound,
            StatusCode::NOT_FOUND,
        ),
        (
            DomainError::invalid_move("nope"),
            ErrorCode::InvalidMove,
            StatusCode::BAD_REQUEST,
        ),
        (
            DomainError::validation(ValidationKind::UnknownRegion, "x"),
            ErrorCode::UnknownRegion,
            StatusCode::BAD_REQUEST,
        ),
        (
            DomainError::validation(ValidationKind::InvalidPairCount, "x"),
            ErrorCode::InvalidPairCount,
            StatusCode::BAD_REQUEST,
        ),
        (
            DomainError::validation(ValidationKind::InvalidEntry, "x"),
            ErrorCode::InvalidEntry,
            StatusCode::BAD_REQUEST,
        ),
        (
            DomainError::validation(ValidationKind::DuplicateEntry, "x"),
            ErrorCode::DuplicateEntry,
            StatusCode::BAD_REQUEST,
        ),
        (
            DomainError::validation(ValidationKind::EmptyDeck, "x"),
            ErrorCode::EmptyDeck,
            StatusCode::BAD_REQUEST,
        ),
    ];

    for (domain, code, status) in cases {
        let detail = domain.detail().to_string();
        let app: AppError = domain.into();
        assert_eq!(app.code(), code);
        assert_eq!(app.status(), status);
        assert_eq!(app.detail(), detail);
    }
}

#[test]
fn session_not_found_detail_names_the_id() {
    let app: AppError = DomainError::session_not_found("s-123").into();
    assert_eq!(app.detail(), "Session s-123 not found");
}
