//! Core-error-to-HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use ticklist_core::Error;

/// Wrapper turning a core [`Error`] into a JSON error response.
///
/// Status mapping: invalid names and requests are 400, missing
/// checklists and date rows are 404, everything else is 500. Server
/// faults are masked in the body so internal paths never reach the
/// caller; upstream API failures are surfaced verbatim.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::InvalidName { .. } | Error::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Error::ChecklistNotFound { .. } | Error::RowNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self.0 {
            Error::Io(_) | Error::Serialization(_) | Error::Internal { .. } => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: Error) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_user_errors_are_400() {
        assert_eq!(status_of(Error::invalid_name("..")), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(Error::invalid_request("missing field")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_missing_things_are_404() {
        assert_eq!(
            status_of(Error::ChecklistNotFound {
                name: "x".to_string()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(Error::RowNotFound {
                date_key: "3/4/2024".to_string()
            }),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_service_faults_are_500() {
        assert_eq!(
            status_of(Error::unavailable("no credentials")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(Error::upstream("HTTP 503")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_faults_are_masked() {
        let io = std::io::Error::other("/var/lib/secret/path");
        let response = ApiError(Error::Io(io)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
