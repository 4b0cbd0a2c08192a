use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::errors::AppError;

/// Client-facing error body. Never carries the wrapped cause.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Stable application error code
    pub code: u16,
    /// Client-safe summary
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

impl IntoErrorResponse for AppError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            Json(ErrorResponse {
                code: self.code(),
                message: self.message().to_string(),
            }),
        )
    }
}
