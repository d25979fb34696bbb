//! Repository error to HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stockroom_core::{ErrorKind, StockroomError};
use tracing::error;

use crate::dto::ErrorBody;

/// A failure translated for the wire
///
/// Carries the status code plus the user-facing message; the original
/// repository error is consumed at construction so handlers can use `?`
/// directly.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 400 with an explicit message, for body/path validation failures
    /// that never reach the repository
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Status this error responds with
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<StockroomError> for ApiError {
    fn from(err: StockroomError) -> Self {
        let status = match err.kind() {
            ErrorKind::InvalidInput | ErrorKind::Reference => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Invariant => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &err {
            StockroomError::CategoryNotFound { .. } => "Category not found".to_string(),
            StockroomError::ProductNotFound { .. } => "Product not found".to_string(),
            StockroomError::UnknownCategoryReference { .. } => "Invalid category ID".to_string(),
            StockroomError::DanglingCategoryReference { .. } => {
                // Correctly guarded writes can never produce this; report
                // the defect before hiding the detail from the client.
                error!(code = ErrorKind::Invariant.code(), %err, "invariant violation surfaced at the boundary");
                "Internal server error".to_string()
            }
            StockroomError::InvalidField { .. } => err.to_string(),
        };

        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { message: self.message })).into_response()
    }
}
