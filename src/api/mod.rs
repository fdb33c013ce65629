//! HTTP API for the extraction service.
//!
//! An axum-based server exposing the extraction pipeline over multipart
//! upload, plus the usual operational endpoints.
//!
//! # Endpoints
//!
//! - `POST /extract-text` — extract text (and tables) from an uploaded PDF
//! - `GET /` — welcome message
//! - `GET /api/health` — health check
//! - `GET /swagger` — interactive API documentation
//! - `GET /static/swagger.json` — OpenAPI schema document
//!
//! # Embedding the router
//!
//! ```no_run
//! use pdf_text_api::{api::create_router, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = create_router(ServerConfig::default());
//!     // nest into a larger Router, or hand to axum::serve directly
//!     # let _ = app;
//! }
//! ```
//!
//! # cURL examples
//!
//! ```bash
//! # Extract text from a PDF
//! curl -F "file=@document.pdf" http://localhost:8000/extract-text
//!
//! # Health check
//! curl http://localhost:8000/api/health
//! ```

pub mod error;
pub mod handlers;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use server::{create_router, serve, ApiState};
pub use types::{ErrorResponse, HealthResponse, HomeResponse, SERVICE_NAME};
