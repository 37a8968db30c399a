//! Success Envelope
//!
//! Successful responses share one JSON shape:
//! `{"success": "<message>", "status_code": 200, ...extra}` where the extra
//! fields come from a flattened payload.

use std::borrow::Cow;

use serde::Serialize;

/// Payload with no extra fields
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoData {}

/// Successful response body
///
/// ```rust
/// use kernel::response::Success;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Created { app_name: String }
///
/// let body = Success::with("Successfully created your app.", Created { app_name: "demo".into() });
/// let json = serde_json::to_value(&body).unwrap();
/// assert_eq!(json["app_name"], "demo");
/// assert_eq!(json["status_code"], 200);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Success<T: Serialize> {
    success: Cow<'static, str>,
    #[serde(flatten)]
    data: T,
    status_code: u16,
}

impl Success<NoData> {
    /// Message-only success
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self::with(message, NoData {})
    }
}

impl<T: Serialize> Success<T> {
    /// Success carrying extra fields
    pub fn with(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self {
            success: message.into(),
            data,
            status_code: 200,
        }
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for Success<T> {
    fn into_response(self) -> axum::response::Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}
