//! Game HTTP routes: start, state, check, conceal and regions.
//!
//! Handlers only translate between JSON and the session service. The
//! service owns validation and locking; every failure surfaces as an
//! `AppError` problem document.

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{CatalogEntry, Region};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

/// A caller-supplied theme entry. Any `id` the client sends is ignored;
/// entries are renumbered server-side.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntryDto {
    pub name: String,
    pub image_ref: String,
}

impl From<CustomEntryDto> for CatalogEntry {
    fn from(dto: CustomEntryDto) -> Self {
        CatalogEntry {
            id: 0,
            name: dto.name,
            image_ref: dto.image_ref,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    pub region: String,
    #[serde(default)]
    pub custom_entries: Option<Vec<CustomEntryDto>>,
    #[serde(default)]
    pub pair_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub session_id: String,
    pub card_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcealRequest {
    pub session_id: String,
}

/// POST /game/start
///
/// Creates a session. `pairCount` falls back to the configured default.
async fn start(
    body: ValidatedJson<StartRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let StartRequest {
        region,
        custom_entries,
        pair_count,
    } = body.into_inner();

    let region: Region = region.parse()?;
    let pair_count = pair_count.unwrap_or(app_state.game.default_pairs);
    let custom_entries =
        custom_entries.map(|entries| entries.into_iter().map(CatalogEntry::from).collect());

    let session = app_state
        .sessions
        .start_session(region, custom_entries, pair_count)?;

    Ok(HttpResponse::Ok().json(session))
}

/// GET /game/state/{session_id}
async fn state(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session_id = path.into_inner();
    let session = app_state.sessions.get_session(&session_id).ok_or_else(|| {
        AppError::not_found(
            ErrorCode::SessionNotFound,
            format!("Session {session_id} not found"),
        )
    })?;
    Ok(HttpResponse::Ok().json(session))
}

/// POST /game/check
///
/// One pairing attempt. Rejected attempts leave the session untouched.
async fn check(
    body: ValidatedJson<CheckRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CheckRequest {
        session_id,
        card_ids,
    } = body.into_inner();

    let result = app_state.sessions.resolve_pair(&session_id, &card_ids)?;
    Ok(HttpResponse::Ok().json(result))
}

/// POST /game/conceal
async fn conceal(
    body: ValidatedJson<ConcealRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = app_state.sessions.conceal(&body.session_id)?;
    Ok(HttpResponse::Ok().json(session))
}

/// GET /game/regions
async fn regions(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let regions = app_state.sessions.regions();
    debug!(count = regions.len(), "regions_listed");
    Ok(HttpResponse::Ok().json(regions))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/start").route(web::post().to(start)));
    cfg.service(web::resource("/state/{session_id}").route(web::get().to(state)));
    cfg.service(web::resource("/check").route(web::post().to(check)));
    cfg.service(web::resource("/conceal").route(web::post().to(conceal)));
    cfg.service(web::resource("/regions").route(web::get().to(regions)));
}
