//! Uniform failure mapping for the HTTP surface.
//!
//! Every failure raised by the context, the command gateway or settle
//! detection is caught at the handler boundary and converted here; nothing
//! propagates further. The body shape is the same for every route:
//! `{"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use navigator_core::NavigatorError;
use serde::Serialize;

/// Body of every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A core error on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub NavigatorError);

impl From<NavigatorError> for ApiError {
    fn from(err: NavigatorError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            // Unsatisfiable preconditions
            NavigatorError::NoActiveEditor | NavigatorError::UnknownCommand(_) => {
                StatusCode::BAD_REQUEST
            }
            // The wait is bounded; report the expiry, never hang.
            NavigatorError::NavigationTimeout => StatusCode::GATEWAY_TIMEOUT,
            // Host-side failures
            NavigatorError::HostAction(_)
            | NavigatorError::HostQuery(_)
            | NavigatorError::ViewStreamClosed => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let resp = ApiError(NavigatorError::NoActiveEditor).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError(NavigatorError::NavigationTimeout).into_response();
        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);

        let resp = ApiError(NavigatorError::HostQuery("down".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
