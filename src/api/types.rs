//! Wire types for the HTTP API.

use serde::{Deserialize, Serialize};

/// Human-readable service name, returned by `/` and `/api/health`.
pub const SERVICE_NAME: &str = "PDF Text Extraction API";

/// Response body for `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    /// Welcome message.
    pub message: String,
    /// Always "success".
    pub status: String,
}

/// Response body for `GET /api/health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process is serving.
    pub status: String,
    /// Service name, for fleet dashboards that scrape many health endpoints.
    pub service: String,
}

/// Error body for every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short, client-safe message describing what went wrong.
    pub error: String,
}
