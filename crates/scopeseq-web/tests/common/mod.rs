//! Router fixtures shared by the web integration tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use scopeseq_common::SubjectData;
use scopeseq_config::GridConfig;
use scopeseq_store::{CatalogStore, JsonCatalogStore, StoreError};
use scopeseq_test_utils::SAMPLE_CATALOG;
use scopeseq_web::{router::build_router, state::AppState};
use tower::ServiceExt;

/// Store whose every call fails, for the 500 paths.
pub struct BrokenStore;

#[async_trait]
impl CatalogStore for BrokenStore {
    async fn get_subject(&self, _subject_id: &str) -> scopeseq_store::Result<Option<SubjectData>> {
        Err(StoreError::NotFound { tried: vec![] })
    }

    async fn all_subjects(&self) -> scopeseq_store::Result<BTreeMap<String, SubjectData>> {
        Err(StoreError::NotFound { tried: vec![] })
    }
}

pub fn router_with(store: Arc<dyn CatalogStore>) -> Router {
    build_router(AppState::new(store, GridConfig::default(), "static").unwrap())
}

pub fn sample_app() -> Router {
    router_with(Arc::new(JsonCatalogStore::from_json_str(SAMPLE_CATALOG).unwrap()))
}

pub fn broken_app() -> Router {
    router_with(Arc::new(BrokenStore))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}
