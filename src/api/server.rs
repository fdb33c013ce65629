//! Router assembly and the server entry point.

use crate::api::handlers;
use crate::config::ServerConfig;
use crate::error::ExtractError;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub config: Arc<ServerConfig>,
}

/// Build the application router for the given config.
///
/// Separate from [`serve`] so tests can drive the router in-process with
/// `tower::ServiceExt::oneshot` and embedders can nest it into a larger app.
pub fn create_router(config: ServerConfig) -> Router {
    let cors = cors_layer(&config);
    let body_limit = DefaultBodyLimit::max(config.max_upload_bytes);
    let state = ApiState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::home))
        .route("/api/health", get(handlers::health))
        .route("/extract-text", post(handlers::extract_text))
        .route("/swagger", get(handlers::swagger_ui))
        .route("/static/swagger.json", get(handlers::openapi_schema))
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<(), ExtractError> {
    let addr = config.bind_addr();
    let app = create_router(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ExtractError::Internal(format!("failed to bind {addr}: {e}")))?;

    info!("listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .map_err(|e| ExtractError::Internal(format!("server error: {e}")))
}

/// Build the CORS layer from the configured origin allow-list.
///
/// An empty list yields a permissive layer (any origin) for local
/// development; a non-empty list restricts browsers to exactly those
/// frontend origins.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!("ignoring invalid CORS origin: {o}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
