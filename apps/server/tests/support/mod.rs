//! Shared harness for HTTP integration tests

#![allow(dead_code)]

use anyhow::Context as _;
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use bazaar::{api::create_router, AppState, Config};
use bazaar_registry_client::{CatalogSnapshot, MetadataSupplier};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt as _;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/catalog.json"
    ))
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> anyhow::Result<Value> {
        serde_json::from_slice(&self.body).context("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    /// App backed by the fixture catalog file.
    pub async fn new() -> anyhow::Result<Self> {
        Self::new_with_config(|_| {}).await
    }

    pub async fn new_with_config(configure: impl FnOnce(&mut Config)) -> anyhow::Result<Self> {
        let mut config = Config::default();
        config.catalog.path = Some(fixture_path());
        configure(&mut config);

        let state = AppState::new(config).await?;
        Ok(Self::from_state(state))
    }

    /// App backed by an arbitrary supplier.
    pub fn with_supplier(supplier: Arc<dyn MetadataSupplier>) -> Self {
        Self::from_state(AppState::with_supplier(Config::default(), supplier))
    }

    fn from_state(state: AppState) -> Self {
        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<TestResponse> {
        self.request(Request::get(uri).body(Body::empty())?).await
    }

    pub async fn request(&self, req: Request<Body>) -> anyhow::Result<TestResponse> {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .context("router call failed")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?
            .to_vec();

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }
}

/// Supplier that always fails with the given error kind.
pub struct FailingSupplier {
    pub malformed: bool,
}

#[async_trait]
impl MetadataSupplier for FailingSupplier {
    async fn snapshot(&self) -> bazaar_registry_client::Result<Arc<CatalogSnapshot>> {
        if self.malformed {
            Err(bazaar_registry_client::Error::InvalidCatalog(
                "duplicate extension id".to_string(),
            ))
        } else {
            Err(bazaar_registry_client::Error::Unavailable(
                "catalog source offline".to_string(),
            ))
        }
    }
}

pub fn ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["id"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
