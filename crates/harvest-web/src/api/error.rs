use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Failure body: the HTTP status and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    Extraction(harvest_core::Error),
    /// Body was not valid JSON or did not match the request shape.
    InvalidBody(JsonRejection),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Extraction(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::InvalidBody(rejection) => rejection.status(),
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Extraction(e) => e.to_string(),
            Self::InvalidBody(rejection) => rejection.body_text(),
        }
    }
}

impl From<harvest_core::Error> for ApiError {
    fn from(err: harvest_core::Error) -> Self {
        Self::Extraction(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        if status.is_server_error() {
            tracing::error!("extraction failed: {}", detail);
        } else {
            tracing::debug!("extraction rejected: {}", detail);
        }

        let body = ErrorResponse {
            status: status.as_u16(),
            detail,
        };

        (status, Json(body)).into_response()
    }
}
