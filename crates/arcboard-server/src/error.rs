//! HTTP error envelope.
//!
//! Every failure is returned as
//! `{ "error": { "message": ..., "code": ..., "details": ... } }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use arc_contracts::ContractError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
}

impl ApiError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code,
            message: message.into(),
            details: None,
        }
    }

    /// A 500 with a generic message. `detail` is only included when the
    /// server is configured to expose internal errors.
    pub fn internal(code: &'static str, message: &str, detail: Option<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code,
            message: message.to_string(),
            details: detail.map(Value::String),
        }
    }

    /// Maps a studio error onto a response, hiding internal detail unless
    /// `expose_details` is set.
    pub fn from_contract_error(err: ContractError, expose_details: bool) -> Self {
        let code = err.code();
        match err {
            ContractError::MalformedRequest { message } => Self::bad_request(code, message),
            ContractError::TemplateNotFound { id } => Self {
                status: StatusCode::NOT_FOUND,
                code,
                message: format!("Template '{}' not found", id),
                details: None,
            },
            ContractError::UnknownTemplate { id } => {
                Self::bad_request(code, format!("Unknown template: {}", id))
            }
            ContractError::InvalidParameters { errors } => Self {
                status: StatusCode::BAD_REQUEST,
                code,
                message: "Invalid parameters".to_string(),
                details: Some(Value::from(errors)),
            },
            other => Self::internal(
                code,
                "Failed to generate contract",
                expose_details.then(|| other.to_string()),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = self.code, message = %self.message, "request failed");
        } else {
            warn!(code = self.code, message = %self.message, "request rejected");
        }

        let body = ErrorEnvelope {
            error: ErrorBody {
                message: &self.message,
                code: self.code,
                details: self.details.as_ref(),
            },
        };
        (self.status, Json(body)).into_response()
    }
}
