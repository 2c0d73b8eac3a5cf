//! Reusable OpenAPI response types for handler annotations.

use super::ProblemDetails;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/problem+json",
    example = json!({
        "type": "https://tools.ietf.org/html/rfc7231#section-6.5.1",
        "title": "Validation Error",
        "status": 400,
        "errors": {
            "title": ["Title cannot be longer than 100 characters"]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ProblemDetails);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed id or body",
    content_type = "application/problem+json",
    example = json!({
        "type": "https://tools.ietf.org/html/rfc7231#section-6.5.1",
        "title": "Bad Request",
        "status": 400,
        "detail": "Invalid UUID format"
    })
)]
pub struct BadRequestResponse(pub ProblemDetails);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/problem+json",
    example = json!({
        "type": "https://tools.ietf.org/html/rfc7231#section-6.5.4",
        "title": "Not Found",
        "status": 404,
        "detail": "TodoItem with id 0192f0c1-5a3e-7b1c-9d2e-3f4a5b6c7d8e was not found"
    })
)]
pub struct NotFoundResponse(pub ProblemDetails);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/problem+json",
    example = json!({
        "type": "https://tools.ietf.org/html/rfc7231#section-6.6.1",
        "title": "Internal Server Error",
        "status": 500,
        "detail": "An error occurred while processing your request."
    })
)]
pub struct InternalServerErrorResponse(pub ProblemDetails);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/problem+json",
    example = json!({
        "type": "https://tools.ietf.org/html/rfc7231#section-6.6.4",
        "title": "Service Unavailable",
        "status": 503,
        "detail": "The service is temporarily unavailable."
    })
)]
pub struct ServiceUnavailableResponse(pub ProblemDetails);
