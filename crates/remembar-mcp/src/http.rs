//! HTTP surface: MCP over streamable HTTP plus a liveness route.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::Request,
    http::header::{HeaderName, ACCEPT, CONTENT_TYPE},
    http::Method,
    middleware as axum_middleware,
    middleware::Next,
    response::Response,
    routing::get,
    Json, Router,
};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::adapter::Adapter;
use crate::server::RemembarServer;

/// Path the MCP service is mounted on.
pub const MCP_PATH: &str = "/mcp";

const MCP_SESSION_HEADER: &str = "mcp-session-id";
const MCP_PROTOCOL_HEADER: &str = "mcp-protocol-version";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness of this process; says nothing about the store.
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the router with the MCP service, health route and middleware.
pub fn create_router(adapter: Arc<Adapter>) -> Router {
    // Stateless: every POST is answered on its own, no session affinity.
    let mcp_service = StreamableHttpService::new(
        move || Ok(RemembarServer::new(adapter.clone())),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig {
            stateful_mode: false,
            ..Default::default()
        },
    );

    Router::new()
        .route("/health", get(health_check))
        .nest_service(MCP_PATH, mcp_service)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(axum_middleware::from_fn(logging_middleware))
}

/// CORS for browser-based MCP clients.
///
/// Any origin may call in, but only with the methods and headers the
/// streamable HTTP transport uses.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            ACCEPT,
            HeaderName::from_static(MCP_SESSION_HEADER),
            HeaderName::from_static(MCP_PROTOCOL_HEADER),
        ])
        .expose_headers([HeaderName::from_static(MCP_SESSION_HEADER)])
}

/// Log one line per request, tagged with whether it hit the MCP endpoint.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let mcp = path.starts_with(MCP_PATH);
    let start = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%method, %path, mcp, status, elapsed_ms, "Bridge request failed");
    } else {
        info!(%method, %path, mcp, status, elapsed_ms, "Bridge request");
    }

    response
}
