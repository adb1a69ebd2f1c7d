//! Local counting endpoint for development and end-to-end tests.
//!
//! - `GET <path>`     : atomically increment and return `{ "<field>": n }`
//! - `OPTIONS <path>` : CORS preflight (204)
//! - `/healthz`       : liveness

pub mod store;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};
use viscount_core::error::{CounterError, Result};
use viscount_core::CountField;

use crate::config::StubSection;

pub use store::CounterStore;

#[derive(Clone)]
pub struct StubState {
    inner: Arc<StubStateInner>,
}

struct StubStateInner {
    store: CounterStore,
    field: CountField,
    allowed_origin: HeaderValue,
}

impl StubState {
    pub fn new(cfg: &StubSection) -> Result<Self> {
        let allowed_origin = HeaderValue::from_str(&cfg.allowed_origin)
            .map_err(|e| CounterError::Config(format!("stub.allowed_origin is not a header value: {e}")))?;
        Ok(Self {
            inner: Arc::new(StubStateInner {
                store: CounterStore::new(cfg.initial),
                field: cfg.field,
                allowed_origin,
            }),
        })
    }

    pub fn store(&self) -> &CounterStore {
        &self.inner.store
    }

    fn cors_headers(&self) -> [(header::HeaderName, HeaderValue); 3] {
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, self.inner.allowed_origin.clone()),
            (header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET,OPTIONS")),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type")),
        ]
    }
}

pub fn build_router(cfg: &StubSection) -> Result<Router> {
    let state = StubState::new(cfg)?;
    Ok(build_router_with_state(&cfg.path, state))
}

pub fn build_router_with_state(path: &str, state: StubState) -> Router {
    Router::new()
        .route(path, get(count_visit).options(preflight))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn count_visit(State(state): State<StubState>) -> Response {
    let n = state.store().incr();
    tracing::debug!(count = n, "visit counted");

    let mut body = Map::new();
    body.insert(state.inner.field.as_str().to_string(), Value::from(n));

    (StatusCode::OK, state.cors_headers(), Json(Value::Object(body))).into_response()
}

async fn preflight(State(state): State<StubState>) -> Response {
    (StatusCode::NO_CONTENT, state.cors_headers()).into_response()
}

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
