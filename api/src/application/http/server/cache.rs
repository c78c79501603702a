use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::MethodRouter;
use serde_json::Value;
use tracing::debug;
use uniportal_core::domain::cache::ports::ResponseCache;
use uniportal_core::infrastructure::cache::InMemoryResponseCache;

use crate::application::http::server::app_state::AppState;

/// Bodies larger than this are served but never cached.
const MAX_CACHED_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Wraps a route in the shared response cache with a per-route TTL.
pub fn cached(
    router: MethodRouter<AppState>,
    cache: &Arc<InMemoryResponseCache>,
    ttl_secs: u64,
) -> MethodRouter<AppState> {
    let cache = cache.clone();
    router.route_layer(middleware::from_fn(move |request: Request, next: Next| {
        let cache = cache.clone();
        async move { serve_cached(cache, Duration::from_secs(ttl_secs), request, next).await }
    }))
}

/// Serves GET responses out of the shared cache, keyed by method and full URI.
///
/// Only 200 responses whose JSON body carries `"status": "success"` are
/// stored, so error envelopes and partial failures always hit the handler.
pub async fn serve_cached(
    cache: Arc<InMemoryResponseCache>,
    ttl: Duration,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = format!("{}:{}", request.method(), request.uri());

    if let Some(hit) = cache.get(&key) {
        debug!("cache hit: {key}");
        return Json(hit).into_response();
    }

    let response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("failed to buffer response body for {key}: {e}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if bytes.len() <= MAX_CACHED_BODY_BYTES
        && let Ok(value) = serde_json::from_slice::<Value>(&bytes)
        && value.get("status").and_then(Value::as_str) == Some("success")
    {
        cache.set(key, value, ttl);
    }

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::Router;
    use axum::middleware::from_fn;
    use axum::routing::get;
    use axum_test::TestServer;
    use serde_json::json;

    fn cached_router(cache: Arc<InMemoryResponseCache>, ttl: Duration) -> Router {
        let hits = Arc::new(AtomicUsize::new(0));
        let ok_hits = hits.clone();
        let error_hits = hits;

        Router::new()
            .route(
                "/ok",
                get(move || {
                    let hits = ok_hits.clone();
                    async move {
                        let n = hits.fetch_add(1, Ordering::SeqCst) + 1;
                        Json(json!({ "status": "success", "calls": n }))
                    }
                }),
            )
            .route(
                "/error",
                get(move || {
                    let hits = error_hits.clone();
                    async move {
                        let n = hits.fetch_add(1, Ordering::SeqCst) + 1;
                        Json(json!({ "status": "error", "calls": n }))
                    }
                }),
            )
            .route_layer(from_fn(move |request: Request, next: Next| {
                let cache = cache.clone();
                async move { serve_cached(cache, ttl, request, next).await }
            }))
    }

    #[tokio::test]
    async fn repeated_get_is_served_from_cache() {
        let cache = Arc::new(InMemoryResponseCache::new(Duration::from_secs(300)));
        let server = TestServer::new(cached_router(cache, Duration::from_secs(300)));

        let first = server.get("/ok").await;
        first.assert_status_ok();
        let first_body: Value = first.json();

        let second = server.get("/ok").await;
        second.assert_status_ok();
        assert_eq!(second.json::<Value>(), first_body);
        assert_eq!(first_body["calls"], 1);
    }

    #[tokio::test]
    async fn error_envelopes_are_not_cached() {
        let cache = Arc::new(InMemoryResponseCache::new(Duration::from_secs(300)));
        let server = TestServer::new(cached_router(cache, Duration::from_secs(300)));

        let first: Value = server.get("/error").await.json();
        let second: Value = server.get("/error").await.json();
        assert_ne!(first["calls"], second["calls"]);
    }

    #[tokio::test]
    async fn expired_entries_fall_through_to_the_handler() {
        let cache = Arc::new(InMemoryResponseCache::new(Duration::from_secs(300)));
        let server = TestServer::new(cached_router(cache, Duration::ZERO));

        let first: Value = server.get("/ok").await.json();
        let second: Value = server.get("/ok").await.json();
        assert_ne!(first["calls"], second["calls"]);
    }

    #[tokio::test]
    async fn distinct_uris_use_distinct_keys() {
        let cache = Arc::new(InMemoryResponseCache::new(Duration::from_secs(300)));
        let server =
            TestServer::new(cached_router(cache.clone(), Duration::from_secs(300)));

        server.get("/ok").await.assert_status_ok();
        assert!(cache.get("GET:/ok").is_some());
        assert!(cache.get("GET:/error").is_none());
    }
}
