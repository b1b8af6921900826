//! HTTP layer for pipeline analysis
//!
//! Thin glue: deserialize the request, call [`analysis::analyze`], serialize
//! the result. Each request is independent and holds no shared state.

use std::net::{IpAddr, SocketAddr};

use axum::{
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::analysis;
use crate::config::ServerConfig;
use crate::error::FlowcheckError;
use crate::pipeline::{Pipeline, PipelineStats};

/// Starts the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the TCP listener
/// fails to bind, or the server encounters a fatal error.
pub async fn serve(config: ServerConfig) -> Result<(), FlowcheckError> {
    if let Some(warning) = config.security_warning() {
        warn!("SECURITY: {}", warning);
    }

    let host: IpAddr = config
        .host
        .parse()
        .map_err(|_| FlowcheckError::InvalidAddr {
            addr: format!("{}:{}", config.host, config.port),
        })?;
    let addr = SocketAddr::new(host, config.port);

    let app = router(&config);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the application router.
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(ping_handler))
        .route("/health", get(health_handler))
        .route("/pipelines/parse", post(parse_handler))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
}

/// Builds the CORS layer based on server configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if config.allowed_origins.is_empty() {
        // No origins allowed - most restrictive
        cors
    } else if config.allowed_origins.len() == 1 && config.allowed_origins[0] == "*" {
        cors.allow_origin(AllowOrigin::any())
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Static acknowledgment used by the pipeline editor to probe the backend.
async fn ping_handler() -> impl IntoResponse {
    Json(serde_json::json!({"Ping": "Pong"}))
}

/// Health check endpoint for load balancers and monitoring.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Analyze a submitted pipeline.
///
/// Malformed bodies never reach this handler; the `Json` extractor rejects
/// them with a client error first.
async fn parse_handler(Json(pipeline): Json<Pipeline>) -> Json<PipelineStats> {
    let stats = analysis::analyze(&pipeline);

    info!(
        num_nodes = stats.num_nodes,
        num_edges = stats.num_edges,
        is_dag = stats.is_dag,
        "pipeline analyzed"
    );

    Json(stats)
}
