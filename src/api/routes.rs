//! API Routes

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{health_handler, retrieve_handler, stats_handler, store_handler, AppState};

/// Builds the router for the cache front end.
///
/// `/cache` takes the key in its query string; GET reads and PUT writes.
/// Requests are traced and CORS is fully open for local tooling.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/cache", get(retrieve_handler).put(store_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ExpiringCache;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use std::time::Duration;
    use tower::util::ServiceExt;

    async fn status_of(method: Method, uri: &str) -> StatusCode {
        let app = create_router(AppState::new(ExpiringCache::new(Duration::from_secs(60))));
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_known_routes_respond() {
        assert_eq!(status_of(Method::GET, "/health").await, StatusCode::OK);
        assert_eq!(status_of(Method::GET, "/stats").await, StatusCode::OK);
        assert_eq!(status_of(Method::PUT, "/cache?key=a").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cache_route_rejects_missing_key_and_unknown_method() {
        assert_eq!(
            status_of(Method::GET, "/cache").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(Method::DELETE, "/cache?key=a").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            status_of(Method::GET, "/cache?key=absent").await,
            StatusCode::NOT_FOUND
        );
    }
}
