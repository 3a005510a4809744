//! Per-request Prometheus accounting

use crate::metrics::{HTTP_REQUESTS_IN_FLIGHT, HTTP_REQUEST_DURATION_SECONDS, HTTP_REQUESTS_TOTAL};
use axum::{extract::Request, middleware::Next, response::Response};
use prometheus::IntGauge;
use std::time::Instant;

/// Decrements the in-flight gauge even if the request future is dropped.
struct InFlight(IntGauge);

impl InFlight {
    fn enter(gauge: IntGauge) -> Self {
        gauge.inc();
        Self(gauge)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.dec();
    }
}

/// Labels by route template (`/extension/:id`), never by raw path.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let route = super::route_template(&req);
    let method = req.method().as_str().to_owned();

    let _in_flight = InFlight::enter(
        HTTP_REQUESTS_IN_FLIGHT.with_label_values(&[method.as_str(), route.as_str()]),
    );
    let started = Instant::now();

    let response = next.run(req).await;

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method.as_str(), route.as_str()])
        .observe(started.elapsed().as_secs_f64());
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), route.as_str(), response.status().as_str()])
        .inc();

    response
}
