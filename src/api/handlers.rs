//! Request handlers.
//!
//! One handler per route. `extract_text` is the whole point of the service;
//! the rest are a welcome page, a health probe, and the API documentation
//! pair (`/swagger` UI shell + `/static/swagger.json` schema).

use crate::api::error::ApiError;
use crate::api::server::ApiState;
use crate::api::types::{HealthResponse, HomeResponse, SERVICE_NAME};
use crate::error::ExtractError;
use crate::extract::{self, ExtractionResult};
use crate::validate;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use tracing::debug;

/// Swagger UI shell. Loads the swagger-ui assets from a CDN and points them
/// at the static schema document, the same split the service has always had
/// between UI and schema.
const SWAGGER_HTML: &str = include_str!("../../static/swagger.html");

/// The OpenAPI schema, embedded at compile time.
const OPENAPI_SCHEMA: &str = include_str!("../../static/swagger.json");

/// `GET /` — welcome endpoint.
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: format!("Welcome to {SERVICE_NAME}"),
        status: "success".to_string(),
    })
}

/// `GET /api/health` — liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// `POST /extract-text` — extract text (and tables) from an uploaded PDF.
///
/// Expects a multipart form with a `file` field holding the PDF binary.
/// Returns `{text}` or `{text, tables}` depending on server configuration.
pub async fn extract_text(
    State(state): State<ApiState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionResult>, ApiError> {
    // Walk the form for the `file` field; other fields are ignored.
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        validate::validate_filename(field.file_name())?;
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        upload = Some((filename, bytes.to_vec()));
        break;
    }

    let (filename, bytes) = upload.ok_or(ExtractError::MissingFile)?;
    debug!(filename = %filename, size = bytes.len(), "received upload");

    let result = extract::extract_document_blocking(bytes, state.config.extract_tables).await?;
    Ok(Json(result))
}

/// `GET /swagger` — interactive API documentation.
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_HTML)
}

/// `GET /static/swagger.json` — the schema document backing the UI.
pub async fn openapi_schema() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        OPENAPI_SCHEMA,
    )
}
