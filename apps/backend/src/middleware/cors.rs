use std::env;

use actix_cors::Cors;
use actix_web::http::header;

const DEV_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Allowed origins as configured in `CORS_ALLOWED_ORIGINS`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Origins {
    Any,
    List(Vec<String>),
}

/// Parse a comma-separated origin list. `*` opens the API to every origin;
/// entries without an http(s) scheme, empty entries and `null` are dropped.
/// Nothing usable falls back to the local dev frontend.
fn parse_origins(raw: &str) -> Origins {
    if raw.trim() == "*" {
        return Origins::Any;
    }

    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect();

    if origins.is_empty() {
        Origins::List(DEV_ORIGINS.iter().map(|s| s.to_string()).collect())
    } else {
        Origins::List(origins)
    }
}

/// CORS for the game API: GET/POST with JSON bodies, trace headers exposed.
pub fn cors_middleware() -> Cors {
    let origins = parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    match origins {
        Origins::Any => cors.allow_any_origin(),
        Origins::List(list) => list
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}
