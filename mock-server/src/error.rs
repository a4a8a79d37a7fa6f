//! Error envelope returned by the mock, matching the Asaas wire shape
//! `{"errors": [{"code": ..., "description": ...}]}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("missing or invalid access_token header")]
    Unauthorized,

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    /// Validation failure with the Asaas-style error code.
    #[error("{description}")]
    Invalid { code: &'static str, description: String },
}

impl MockError {
    pub fn invalid(code: &'static str, description: impl Into<String>) -> Self {
        Self::Invalid {
            code,
            description: description.into(),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "invalid_access_token",
            Self::NotFound { .. } => "not_found",
            Self::Invalid { code, .. } => code,
        }
    }
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Invalid { .. } => StatusCode::BAD_REQUEST,
        };
        let body = serde_json::json!({
            "errors": [{ "code": self.code(), "description": self.to_string() }]
        });
        (status, axum::Json(body)).into_response()
    }
}
