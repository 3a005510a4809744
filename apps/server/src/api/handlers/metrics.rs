//! Prometheus exposition endpoint

use crate::{Error, Result};
use axum::{http::header, response::IntoResponse};
use prometheus::{Encoder, TextEncoder};

/// `GET /metrics` in Prometheus text format
pub async fn metrics_handler() -> Result<impl IntoResponse> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();

    encoder
        .encode(&prometheus::gather(), &mut buffer)
        .map_err(|e| Error::Internal(format!("Failed to encode metrics: {e}")))?;

    Ok(([(header::CONTENT_TYPE, encoder.format_type().to_string())], buffer))
}
