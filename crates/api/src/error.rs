//! Rendering of application errors as JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;
use wallet_db::WalletRepositoryError;
use wallet_shared::{AppError, ValidationErrors};

/// An [`AppError`] on its way out of a handler.
///
/// Renders as `{"error": CODE, "message": text}`, plus `"errors"` keyed by
/// field for validation failures. Internal faults are logged and their
/// details withheld from the client.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self(AppError::Validation(errors))
    }
}

impl From<WalletRepositoryError> for ApiError {
    fn from(err: WalletRepositoryError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match &err {
            AppError::Validation(errors) => json!({
                "error": err.error_code(),
                "message": "The given data was invalid.",
                "errors": errors,
            }),
            _ if err.is_internal() => {
                error!(error = %err, code = err.error_code(), "Request failed");
                json!({
                    "error": err.error_code(),
                    "message": "An internal error occurred",
                })
            }
            AppError::NotFound(message)
            | AppError::InsufficientFunds(message)
            | AppError::LimitExceeded(message) => json!({
                "error": err.error_code(),
                "message": message,
            }),
            _ => json!({
                "error": err.error_code(),
                "message": err.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
