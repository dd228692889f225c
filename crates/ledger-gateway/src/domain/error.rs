//! REST-facing error mapping. Converts [`ledger_types::LedgerError`] into
//! an HTTP status and JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ledger_types::LedgerError;
use serde::Serialize;

/// The JSON body returned alongside any non-2xx response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Machine-readable error kind, e.g. `"not_found"`.
    pub kind: &'static str,
    /// Human-readable detail.
    pub message: String,
}

impl ApiError {
    fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self.kind {
            "not_found" => StatusCode::NOT_FOUND,
            "forbidden" | "not_endorsed" => StatusCode::FORBIDDEN,
            "conflict" => StatusCode::CONFLICT,
            "bad_payload" | "invalid_amount" | "inactive_token" | "schedule_empty" => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::BadPayload(m) => ApiError::new("bad_payload", m),
            LedgerError::Forbidden(m) => ApiError::new("forbidden", m),
            LedgerError::NotFound(m) => ApiError::new("not_found", m),
            LedgerError::Conflict(m) => ApiError::new("conflict", m),
            LedgerError::InvalidAmount(m) => ApiError::new("invalid_amount", m),
            LedgerError::InactiveToken(m) => ApiError::new("inactive_token", m),
            LedgerError::NotEndorsed(m) => ApiError::new("not_endorsed", m),
            LedgerError::ScheduleEmpty(m) => ApiError::new("schedule_empty", m),
            LedgerError::InternalError(m) => ApiError::new("internal_error", m),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Result type used by every route handler.
pub type ApiResult<T> = Result<T, ApiError>;
