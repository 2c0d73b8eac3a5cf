use axum::response::{IntoResponse, Response};
use axum::http::StatusCode;

use super::{messages, ProblemDetails};

/// Router fallback for unmatched paths.
pub async fn not_found() -> Response {
    ProblemDetails::for_status(StatusCode::NOT_FOUND)
        .with_detail(messages::ROUTE_NOT_FOUND_DETAIL)
        .into_response()
}

/// Fallback for a matched path with an unsupported method.
pub async fn method_not_allowed() -> Response {
    ProblemDetails::for_status(StatusCode::METHOD_NOT_ALLOWED)
        .with_detail(messages::METHOD_NOT_ALLOWED_DETAIL)
        .into_response()
}
