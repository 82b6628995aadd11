//! `calc serve` -- HTTP JSON API for the calculator.
//!
//! Exposes a [`calc_core::Calculator`] as an async HTTP service using
//! `axum` + `tokio`. The calculator's history is shared by every request
//! through axum state and is lost when the process exits.
//!
//! Endpoints:
//! - GET    /health               - Liveness check
//! - POST   /api/calc             - Compute `a op b` and record it
//! - GET    /api/history?limit=N  - Most recent records, newest first
//! - DELETE /api/history          - Drop all records
//!
//! CORS is permissive (any origin, method, header) unless an allow-list of
//! origins is configured. All responses use Content-Type: application/json;
//! errors are `{"detail": "..."}`.

mod error;
mod handlers;
mod state;

use std::any::Any as PanicPayload;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use self::handlers::{
    handle_calculate, handle_clear_history, handle_health, handle_list_history, handle_not_found,
};
use self::state::AppState;

/// Maximum request body size: 64 KB.
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Comma-separated CORS allow-list used when no `--cors-origin` is given.
const CORS_ORIGINS_ENV: &str = "CALC_CORS_ORIGINS";

/// Settings for [`start_server`], filled from the command line.
#[derive(Debug, Clone)]
pub(crate) struct ServeConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    /// Allowed CORS origins. Empty means any origin.
    pub(crate) cors_origins: Vec<String>,
    pub(crate) history_capacity: usize,
}

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({ "detail": message })))
}

/// Render a handler panic as a bare 500. The panic message is logged, never
/// sent to the client.
fn handle_panic(err: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let message = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    error!(panic = message, "request handler panicked");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

/// True when `origins` allows any origin: nothing configured, or a `*` entry.
fn is_permissive(origins: &[String]) -> bool {
    origins.is_empty() || origins.iter().any(|o| o == "*")
}

/// Build the CORS layer: permissive when `origins` is empty or contains `*`,
/// otherwise an exact-match allow-list. Credentials are never allowed.
fn cors_layer(origins: &[String]) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    if is_permissive(origins) {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let values = origins
        .iter()
        .map(|o| HeaderValue::from_str(o))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(values))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any))
}

/// Origins from `--cors-origin`, falling back to `CALC_CORS_ORIGINS`.
fn resolve_cors_origins(from_args: Vec<String>) -> Vec<String> {
    if !from_args.is_empty() {
        return from_args;
    }
    std::env::var(CORS_ORIGINS_ENV)
        .map(|v| parse_origin_list(&v))
        .unwrap_or_default()
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Assemble the router with all routes and layers applied.
fn build_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    let routes = Router::new()
        .route("/health", get(handle_health))
        .route("/api/calc", post(handle_calculate))
        .route(
            "/api/history",
            get(handle_list_history).delete(handle_clear_history),
        );
    with_layers(routes, cors).with_state(state)
}

/// Apply the fallback and middleware stack shared by every route.
fn with_layers(routes: Router<Arc<AppState>>, cors: CorsLayer) -> Router<Arc<AppState>> {
    routes
        .fallback(handle_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}

/// Start the HTTP server and run until Ctrl+C.
pub(crate) async fn start_server(config: ServeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let origins = resolve_cors_origins(config.cors_origins);
    let cors = cors_layer(&origins)?;
    if is_permissive(&origins) {
        warn!("CORS is permissive: any origin may call this API");
    } else {
        info!(origins = ?origins, "CORS restricted to allow-list");
    }

    let state = Arc::new(AppState::new(config.history_capacity));
    info!(
        capacity = state.calculator.capacity(),
        "history buffer ready"
    );
    let app = build_router(state, cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("calculator API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal");
}
