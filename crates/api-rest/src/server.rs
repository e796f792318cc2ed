//! REST Server
//!
//! axum router over the operation table with permissive CORS and HTTP
//! request tracing.

use crate::routes::{
    health, method_not_allowed_as_json, not_found, operation_routes, root, AppState,
};
use axum::middleware::map_response;
use axum::routing::get;
use axum::Router;
use sleepwell_core::SleepService;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

const DEFAULT_REST_HOST: &str = "0.0.0.0";
const DEFAULT_REST_PORT: u16 = 8000;

/// REST Server Configuration
#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RestServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_REST_HOST.to_string(),
            port: DEFAULT_REST_PORT,
        }
    }
}

/// Full router (usable without binding a socket)
pub fn build_router(service: Arc<SleepService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(operation_routes())
        .fallback(not_found)
        .with_state(AppState::new(service))
        .layer(map_response(method_not_allowed_as_json))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// REST Server
pub struct RestServer {
    config: RestServerConfig,
    service: Arc<SleepService>,
}

/// Handle to a running REST server
pub struct RestServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl RestServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Ask the server to stop accepting connections
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Wait until in-flight requests have drained
    pub async fn stopped(self) {
        if let Err(e) = self.task.await {
            warn!(error = %e, "REST server task ended abnormally");
        }
    }
}

impl RestServer {
    pub fn new(config: RestServerConfig, service: Arc<SleepService>) -> Self {
        Self { config, service }
    }

    /// Bind and serve in a background task
    ///
    /// Port 0 binds an ephemeral port; the handle reports the actual address.
    pub async fn start(self) -> Result<RestServerHandle, String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting REST server"
        );

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| format!("Failed to bind REST server to {}: {}", addr, e))?;

        let local_addr = listener
            .local_addr()
            .map_err(|e| format!("Failed to get REST local address: {}", e))?;

        let router = build_router(self.service);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let shutdown = async {
                let _ = shutdown_rx.await;
            };
            if let Err(e) = axum::serve(listener, router)
                .with_graceful_shutdown(shutdown)
                .await
            {
                warn!(error = %e, "REST server stopped with error");
            }
        });

        info!(addr = %local_addr, "REST server started");

        Ok(RestServerHandle {
            local_addr,
            shutdown_tx: Some(shutdown_tx),
            task,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use sleepwell_core::domain::QuoteStore;
    use sleepwell_core::port::{FixedTimeProvider, RoundRobinPicker};
    use tower::ServiceExt;

    fn router_at(hour: u32) -> Router {
        let service = SleepService::new(
            Arc::new(QuoteStore::builtin().unwrap()),
            Arc::new(FixedTimeProvider::at(hour, 0).unwrap()),
            Arc::new(RoundRobinPicker::new()),
        );
        build_router(Arc::new(service))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let (status, body) = get_json(router_at(12), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "sleepwell-quotes");
        assert_eq!(body["endpoints"]["search_sleep_quotes"], "/api/search/:query");
        assert_eq!(body["operations"].as_array().unwrap().len(), 7);
        assert!(body["total_quotes"].as_u64().unwrap() >= 15);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(router_at(12), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["timestamp"], "2024-01-01T12:00:00");
    }

    #[tokio::test]
    async fn test_quote_with_mood_filter() {
        let (status, body) = get_json(router_at(12), "/api/quote?mood=calm").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["quote"]["mood"], "calm");
    }

    #[tokio::test]
    async fn test_quote_time_based_follows_clock() {
        let (_, body) = get_json(router_at(23), "/api/quote?time_based=true").await;
        let tag = body["quote"]["time_of_day"].as_str().unwrap();
        assert!(tag == "night" || tag == "any", "got {}", tag);
    }

    #[tokio::test]
    async fn test_invalid_enum_is_bad_request() {
        let (status, body) = get_json(router_at(12), "/api/quote?category=poetry").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "validation_error");
        assert!(body["error"]["message"].as_str().unwrap().contains("category"));
    }

    #[tokio::test]
    async fn test_invalid_boolean_is_bad_request() {
        let (status, _) = get_json(router_at(12), "/api/wisdom?include_tip=maybe").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_uses_path_segment() {
        let (status, body) = get_json(router_at(12), "/api/search/SLEEP?limit=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query"], "SLEEP");
        assert_eq!(body["results"].as_array().unwrap().len(), 3);
        assert_eq!(body["total_found"], 3);
    }

    #[tokio::test]
    async fn test_search_limit_out_of_range() {
        let (status, _) = get_json(router_at(12), "/api/search/sleep?limit=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wisdom_without_tip() {
        let (status, body) = get_json(router_at(19), "/api/wisdom?include_tip=false").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"], "evening");
        assert!(body["tip"].is_null());
    }

    #[tokio::test]
    async fn test_bedtime_rejects_bad_clock() {
        let (status, _) = get_json(router_at(12), "/api/bedtime?user_bedtime=25:00").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = get_json(router_at(12), "/api/bedtime?user_bedtime=23:15").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bedtime"], "23:15");
    }

    #[tokio::test]
    async fn test_unknown_path_is_json_404() {
        let (status, body) = get_json(router_at(12), "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn test_undecodable_path_segment_is_json_400() {
        let (status, body) = get_json(router_at(12), "/api/search/%FF").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "validation_error");
        assert!(!body["error"]["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_query_value_is_json_400() {
        let (status, body) = get_json(router_at(12), "/api/quote?mood=%FF").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_unsupported_method_is_json_405() {
        let response = router_at(12)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/quote")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.headers().contains_key(axum::http::header::ALLOW));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "method_not_allowed");
    }

    #[tokio::test]
    async fn test_start_on_ephemeral_port() {
        let service = Arc::new(SleepService::new(
            Arc::new(QuoteStore::builtin().unwrap()),
            Arc::new(FixedTimeProvider::at(8, 0).unwrap()),
            Arc::new(RoundRobinPicker::new()),
        ));
        let config = RestServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };

        let mut handle = RestServer::new(config, service).start().await.unwrap();
        assert_ne!(handle.local_addr().port(), 0);

        handle.stop();
        handle.stopped().await;
    }
}
