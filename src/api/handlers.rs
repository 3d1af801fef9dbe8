//! API Handlers
//!
//! HTTP request handlers for each cache endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{HealthResponse, KeyQuery, StatsResponse, StoreResponse};

/// Application state shared across all handlers.
///
/// The cache does its own locking, so the state only needs an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ExpiringCache>,
}

impl AppState {
    pub fn new(cache: ExpiringCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates the cache described by `config` and wraps it in state.
    ///
    /// Must be called inside a tokio runtime, since the cache starts its
    /// reaper immediately.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ExpiringCache::new(config.ttl()))
    }
}

/// Handler for PUT /cache?key=...
///
/// Stores the request body verbatim.
pub async fn store_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
    body: Bytes,
) -> Json<StoreResponse> {
    let bytes = body.len();
    state.cache.store(query.key.as_str(), body.to_vec()).await;

    Json(StoreResponse::new(query.key, bytes))
}

/// Handler for GET /cache?key=...
///
/// Returns the stored payload as `application/octet-stream`, or 404 when the
/// key is absent or stale.
pub async fn retrieve_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> Result<Response> {
    match state.cache.retrieve(&query.key).await {
        Some(value) => Ok((
            [(header::CONTENT_TYPE, "application/octet-stream")],
            value,
        )
            .into_response()),
        None => Err(CacheError::NotFound(query.key)),
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    let ttl_ms = u64::try_from(state.cache.ttl().as_millis()).unwrap_or(u64::MAX);

    Json(StatsResponse::new(&stats, ttl_ms))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use std::time::Duration;

    fn test_state() -> AppState {
        AppState::new(ExpiringCache::new(Duration::from_secs(60)))
    }

    fn key(key: &str) -> Query<KeyQuery> {
        Query(KeyQuery {
            key: key.to_string(),
        })
    }

    #[tokio::test]
    async fn test_store_and_retrieve_handler() {
        let state = test_state();

        let stored = store_handler(
            State(state.clone()),
            key("https://pokeapi.co/api/v2/location-area"),
            Bytes::from_static(b"{\"count\":1089}"),
        )
        .await;
        assert_eq!(stored.bytes, 14);

        let response = retrieve_handler(
            State(state),
            key("https://pokeapi.co/api/v2/location-area"),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"{\"count\":1089}");
    }

    #[tokio::test]
    async fn test_retrieve_missing_key() {
        let result = retrieve_handler(State(test_state()), key("nonexistent")).await;
        assert!(matches!(result, Err(CacheError::NotFound(k)) if k == "nonexistent"));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();
        let _ = retrieve_handler(State(state.clone()), key("miss")).await;

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 1);
        assert_eq!(response.ttl_ms, 60_000);
    }

    #[tokio::test]
    async fn test_stats_handler_saturates_huge_ttl() {
        let state = AppState::new(ExpiringCache::new(Duration::MAX));

        let response = stats_handler(State(state)).await;
        assert_eq!(response.ttl_ms, u64::MAX);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
