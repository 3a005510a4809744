//! Prometheus metrics for the catalog service

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_histogram_vec, register_int_counter_vec, register_int_gauge,
    register_int_gauge_vec, Histogram, HistogramVec, IntCounterVec, IntGauge, IntGaugeVec,
};

lazy_static! {
    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "bazaar_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "bazaar_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "bazaar_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    /// Catalog searches by outcome (success, invalid, unavailable)
    pub static ref SEARCH_TOTAL: IntCounterVec = register_int_counter_vec!(
        "bazaar_search_total",
        "Total number of catalog searches",
        &["outcome"]
    )
    .expect("Failed to register SEARCH_TOTAL");

    /// Matches per search, before pagination
    pub static ref SEARCH_MATCHES: Histogram = register_histogram!(
        "bazaar_search_matches",
        "Number of records matching a search before pagination",
        vec![0.0, 1.0, 5.0, 10.0, 50.0, 100.0, 500.0, 1000.0, 5000.0]
    )
    .expect("Failed to register SEARCH_MATCHES");

    /// Requests rejected by the per-client limiter, by window (hourly, daily)
    pub static ref RATE_LIMITED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "bazaar_rate_limited_total",
        "Total number of requests rejected by rate limiting",
        &["window"]
    )
    .expect("Failed to register RATE_LIMITED_TOTAL");

    pub static ref CATALOG_RECORDS: IntGauge = register_int_gauge!(
        "bazaar_catalog_records",
        "Number of records in the most recently served catalog snapshot"
    )
    .expect("Failed to register CATALOG_RECORDS");
}
