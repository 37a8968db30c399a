//! Error conversions - HTTP rendering of [`AppError`]
//!
//! Every failure leaves the service as the same JSON envelope:
//! `{"error": "<message>", "status_code": <status>}`, with `status_code`
//! mirrored in the HTTP status line.

use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "error": self.message(),
            "status_code": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
