//! Request identity: server-assigned id, client correlation id and trace id

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use opentelemetry::trace::TraceContextExt;
use std::time::Instant;
use tracing::{field, Instrument};
use tracing_opentelemetry::OpenTelemetrySpanExt;
use uuid::Uuid;

const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
const CORRELATION_ID: HeaderName = HeaderName::from_static("x-correlation-id");
const TRACE_ID: HeaderName = HeaderName::from_static("x-trace-id");

/// Wraps each request in an `http_request` span.
///
/// Every response carries a fresh `x-request-id` and the span's `x-trace-id`.
/// A client-sent `x-request-id` is never trusted as ours; it is returned as
/// `x-correlation-id` instead.
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let correlation_id = correlation_id(req.headers(), &request_id);

    let span = tracing::info_span!(
        "http_request",
        http.method = %req.method(),
        http.route = %super::route_template(&req),
        otel.kind = "server",
        request_id = %request_id,
        correlation_id = field::Empty,
        http.response.status_code = field::Empty,
    );
    if let Some(id) = &correlation_id {
        span.record("correlation_id", id.as_str());
    }

    let started = Instant::now();
    let mut response = next.run(req).instrument(span.clone()).await;
    let status = response.status().as_u16();

    span.record("http.response.status_code", status);
    span.in_scope(|| {
        tracing::info!(
            status,
            duration_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        )
    });

    let trace_id = span.context().span().span_context().trace_id().to_string();
    let headers = response.headers_mut();
    set_header(headers, REQUEST_ID, &request_id);
    set_header(headers, TRACE_ID, &trace_id);
    if let Some(id) = correlation_id {
        set_header(headers, CORRELATION_ID, &id);
    }

    response
}

fn correlation_id(headers: &HeaderMap, request_id: &str) -> Option<String> {
    headers
        .get(&REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && *id != request_id)
        .map(String::from)
}

fn set_header(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(name, value);
    }
}
