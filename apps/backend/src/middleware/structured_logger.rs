use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn, Level};

/// Emits one `request_completed` event per request. The level follows the
/// status class; the matched route pattern and session id (when the route
/// has one) are attached so that a session's traffic can be followed.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, route, session_id) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request().match_pattern().unwrap_or_default(),
                    res.request()
                        .match_info()
                        .get("session_id")
                        .unwrap_or_default()
                        .to_string(),
                ),
                Err(err) => (
                    err.as_response_error().status_code(),
                    String::new(),
                    String::new(),
                ),
            };
            let status_code = status.as_u16();
            let duration_us = start.elapsed().as_micros() as u64;

            match level_for(status) {
                Level::ERROR => {
                    error!(http.method=%method, url.path=%path, http.route=%route, session_id=%session_id, http.status_code=status_code, duration_us, trace_id=%trace_id, "request_completed")
                }
                Level::WARN => {
                    warn!(http.method=%method, url.path=%path, http.route=%route, session_id=%session_id, http.status_code=status_code, duration_us, trace_id=%trace_id, "request_completed")
                }
                _ => {
                    info!(http.method=%method, url.path=%path, http.route=%route, session_id=%session_id, http.status_code=status_code, duration_us, trace_id=%trace_id, "request_completed")
                }
            }

            result
        })
    }
}
