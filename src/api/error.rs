//! HTTP mapping for [`ExtractError`].
//!
//! The status code is a pure function of the error variant: validation
//! failures are 400, everything else is 500. The response body always
//! carries the sanitized [`ExtractError::client_message`]; the full error
//! (with parser detail) goes to the log at the appropriate level.

use crate::api::types::ErrorResponse;
use crate::error::ExtractError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

/// Error wrapper returned by every handler.
#[derive(Debug)]
pub struct ApiError(pub ExtractError);

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        ApiError(err)
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError(ExtractError::Upload {
            detail: err.to_string(),
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            warn!("request rejected: {}", self.0);
            StatusCode::BAD_REQUEST
        } else {
            error!("extraction failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = ErrorResponse {
            error: self.0.client_message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let resp = ApiError(ExtractError::MissingFile).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn extraction_maps_to_500() {
        let resp = ApiError(ExtractError::Extraction {
            detail: "broken xref".into(),
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
