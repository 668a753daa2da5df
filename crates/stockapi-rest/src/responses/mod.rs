//! Response envelope and error mapping for handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stockapi_core::{ErrorResponse, StockApiError};
use tracing::error;

/// `{ success, data?, error? }` body shared by every stock endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

/// Handler error; rendered with the status of the wrapped [`StockApiError`].
#[derive(Debug)]
pub struct AppError(pub StockApiError);

impl From<StockApiError> for AppError {
    fn from(err: StockApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        let body = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ErrorResponse::from(&self.0)),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Wraps `data` in a successful envelope.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse {
        success: true,
        data: Some(data),
        error: None,
    }))
}
