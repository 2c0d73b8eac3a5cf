//! RFC 7807 problem details, the body of every error response.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::messages;

/// `application/problem+json` body.
///
/// ```json
/// {
///   "type": "https://tools.ietf.org/html/rfc7231#section-6.5.4",
///   "title": "Not Found",
///   "status": 404,
///   "detail": "TodoItem with id 0192f0c1-... was not found"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Field name to messages; only present on validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ProblemDetails {
    /// Problem with the type and title that belong to `status`.
    pub fn for_status(status: StatusCode) -> Self {
        let (problem_type, title) = match status {
            StatusCode::NOT_FOUND => (messages::TYPE_NOT_FOUND, messages::TITLE_NOT_FOUND),
            StatusCode::METHOD_NOT_ALLOWED => (
                messages::TYPE_METHOD_NOT_ALLOWED,
                messages::TITLE_METHOD_NOT_ALLOWED,
            ),
            StatusCode::SERVICE_UNAVAILABLE => (
                messages::TYPE_SERVICE_UNAVAILABLE,
                messages::TITLE_SERVICE_UNAVAILABLE,
            ),
            s if s.is_server_error() => {
                (messages::TYPE_INTERNAL_ERROR, messages::TITLE_INTERNAL_ERROR)
            }
            _ => (messages::TYPE_BAD_REQUEST, messages::TITLE_BAD_REQUEST),
        };

        Self {
            problem_type: problem_type.to_string(),
            title: title.to_string(),
            status: status.as_u16(),
            detail: None,
            errors: None,
        }
    }

    /// 400 "Validation Error" carrying per-field messages.
    pub fn validation(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            title: messages::TITLE_VALIDATION.to_string(),
            errors: Some(errors),
            ..Self::for_status(StatusCode::BAD_REQUEST)
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, messages::PROBLEM_JSON)],
            Json(self),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_status_picks_type_and_title() {
        let cases = [
            (StatusCode::BAD_REQUEST, "Bad Request", "#section-6.5.1"),
            (StatusCode::NOT_FOUND, "Not Found", "#section-6.5.4"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", "#section-6.6.1"),
            (StatusCode::BAD_GATEWAY, "Internal Server Error", "#section-6.6.1"),
            (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable", "#section-6.6.4"),
        ];

        for (status, title, fragment) in cases {
            let problem = ProblemDetails::for_status(status);
            assert_eq!(problem.title, title);
            assert!(problem.problem_type.ends_with(fragment), "{status}");
            assert_eq!(problem.status, status.as_u16());
        }
    }

    #[test]
    fn test_serializes_type_field_and_omits_empty_members() {
        let problem = ProblemDetails::for_status(StatusCode::NOT_FOUND).with_detail("gone");
        let json = serde_json::to_value(&problem).unwrap();

        assert_eq!(json["type"], messages::TYPE_NOT_FOUND);
        assert_eq!(json["detail"], "gone");
        assert!(json.get("errors").is_none());
        assert!(json.get("problem_type").is_none());
    }

    #[test]
    fn test_validation_problem() {
        let errors = BTreeMap::from([(
            "title".to_string(),
            vec!["Title is required".to_string()],
        )]);
        let problem = ProblemDetails::validation(errors);

        assert_eq!(problem.title, "Validation Error");
        assert_eq!(problem.status, 400);
        assert_eq!(problem.problem_type, messages::TYPE_BAD_REQUEST);
        assert!(problem.detail.is_none());
        assert_eq!(problem.errors.unwrap()["title"], vec!["Title is required"]);
    }

    #[test]
    fn test_into_response_sets_problem_content_type() {
        let response = ProblemDetails::for_status(StatusCode::NOT_FOUND).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            messages::PROBLEM_JSON
        );
    }
}
