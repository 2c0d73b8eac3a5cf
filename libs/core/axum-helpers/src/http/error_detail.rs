use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errors::{InternalErrorDetail, ProblemDetails};

/// Replaces the generic 5xx detail with the underlying error text.
///
/// Only for development: the text can contain SQL, paths or driver messages.
pub async fn expose_internal_errors(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let Some(InternalErrorDetail(detail)) = response.extensions().get::<InternalErrorDetail>().cloned()
    else {
        return response;
    };

    ProblemDetails::for_status(response.status())
        .with_detail(detail)
        .into_response()
}
