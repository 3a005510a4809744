//! Per-client admission control in front of the catalog routes

use crate::{metrics, rate_limit::RateDecision, state::AppState, Error};
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::net::SocketAddr;

const LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
const REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
const RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");

/// Rejects over-limit clients with 429 and annotates admitted responses.
///
/// Health checks, metric scrapes and preflight requests are never limited.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    if !state.rate_limiter.is_enabled() || is_exempt(&req) {
        return next.run(req).await;
    }

    let client = client_key(&req);
    let Some(decision) = state.rate_limiter.check(&client) else {
        return next.run(req).await;
    };

    let mut response = match decision.exceeded {
        Some(window) => {
            metrics::RATE_LIMITED_TOTAL
                .with_label_values(&[window.as_str()])
                .inc();
            tracing::info!(client = %client, window = %window, "Rate limit exceeded");

            let mut response = Error::RateLimited(decision.message()).into_response();
            let retry_after = (decision.reset_at - Utc::now()).num_seconds().max(1);
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
            response
        }
        None => next.run(req).await,
    };

    limit_headers(response.headers_mut(), &decision);
    response
}

fn is_exempt(req: &Request) -> bool {
    req.method() == axum::http::Method::OPTIONS
        || matches!(req.uri().path(), "/health" | "/metrics")
}

fn limit_headers(headers: &mut HeaderMap, decision: &RateDecision) {
    headers.insert(LIMIT, HeaderValue::from(decision.limit));
    headers.insert(REMAINING, HeaderValue::from(decision.remaining));
    headers.insert(RESET, HeaderValue::from(decision.reset_at.timestamp()));
}

/// Client address: first `x-forwarded-for` hop, then `x-real-ip`, then the peer.
fn client_key(req: &Request) -> String {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    header("x-forwarded-for")
        .or_else(|| header("x-real-ip"))
        .or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
