use std::future::Future;
use std::ops::{Deref, DerefMut};
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header::CONTENT_LENGTH;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// Default cap on a JSON request body. Sized for a start request carrying a
/// few hundred custom entries.
pub const DEFAULT_BODY_LIMIT: usize = 256 * 1024;

/// App data overriding [`DEFAULT_BODY_LIMIT`] for [`ValidatedJson`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLimit(pub usize);

impl Default for BodyLimit {
    fn default() -> Self {
        Self(DEFAULT_BODY_LIMIT)
    }
}

/// JSON request body for the game routes.
///
/// Bodies over the configured [`BodyLimit`] and bodies that do not parse into
/// `T` are rejected with a `BAD_REQUEST` problem document.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let limit = req.app_data::<BodyLimit>().copied().unwrap_or_default().0;
        let declared = req
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<usize>().ok());
        let route = req.path().to_string();
        let mut payload = payload.take();

        Box::pin(async move {
            if let Some(length) = declared.filter(|length| *length > limit) {
                debug!(%route, length, limit, "request_body_rejected");
                return Err(body_too_large(limit));
            }

            let body = read_body(&mut payload, limit, &route).await?;
            serde_json::from_slice::<T>(&body)
                .map(ValidatedJson)
                .map_err(|err| {
                    debug!(
                        trace_id = %trace_ctx::trace_id(),
                        %route,
                        error = %err,
                        body_size = body.len(),
                        "request_body_unparsable"
                    );
                    AppError::bad_request(ErrorCode::BadRequest, describe_json_error(&err))
                })
        })
    }
}

/// Buffer the payload, failing as soon as it grows past `limit`.
async fn read_body(payload: &mut Payload, limit: usize, route: &str) -> Result<BytesMut, AppError> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| {
            warn!(trace_id = %trace_ctx::trace_id(), route, error = %err, "request_body_read_failed");
            AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
        })?;
        if body.len() + chunk.len() > limit {
            debug!(route, limit, "request_body_rejected");
            return Err(body_too_large(limit));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn body_too_large(limit: usize) -> AppError {
    AppError::bad_request(
        ErrorCode::BadRequest,
        format!("Request body exceeds {limit} bytes"),
    )
}

/// Client-facing summary of a parse failure; never echoes the body.
fn describe_json_error(err: &serde_json::Error) -> String {
    match err.classify() {
        Category::Syntax => format!("Invalid JSON at line {}", err.line()),
        Category::Eof => "Invalid JSON: unexpected end of input".into(),
        Category::Data => "Invalid JSON: wrong types for one or more fields".into(),
        Category::Io => "Invalid JSON: I/O error while reading body".into(),
    }
}
