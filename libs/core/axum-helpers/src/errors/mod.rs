pub mod codes;
pub mod handlers;
pub mod messages;
pub mod problem;
pub mod responses;

pub use codes::ErrorCode;
pub use problem::ProblemDetails;

use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Error as UuidError;
use validator::ValidationErrors;

/// Full text of a 5xx error, attached to the response as an extension.
///
/// The body itself only carries [`messages::INTERNAL_ERROR_DETAIL`];
/// [`crate::http::expose_internal_errors`] swaps this text in for local runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalErrorDetail(pub String);

/// Application error type that can be converted to HTTP responses.
///
/// Every variant renders as a [`ProblemDetails`] body and is logged with its
/// [`ErrorCode`]: `info` for client errors, `error` for server errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("UUID error: {0}")]
    UuidError(#[from] UuidError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::InvalidJson,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::UuidError(_) => ErrorCode::InvalidUuid,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Database(DbErr::ConnectionAcquire(_)) => ErrorCode::DatabasePoolTimeout,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
            AppError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.error_code() {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorCode::ServiceUnavailable | ErrorCode::DatabasePoolTimeout => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ErrorCode::InternalError | ErrorCode::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ErrorCode::ValidationError
            | ErrorCode::InvalidUuid
            | ErrorCode::InvalidJson
            | ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
        }
    }

    /// Public body. Server errors never carry their own text here.
    pub fn to_problem(&self) -> ProblemDetails {
        let status = self.status();
        let problem = ProblemDetails::for_status(status);

        match self {
            AppError::ValidationError(errors) => ProblemDetails::validation(field_messages(errors)),
            AppError::JsonExtractorRejection(rejection) => problem.with_detail(rejection.body_text()),
            AppError::UuidError(_) => problem.with_detail("Invalid UUID format"),
            AppError::BadRequest(msg) | AppError::NotFound(msg) => problem.with_detail(msg.clone()),
            _ if status == StatusCode::SERVICE_UNAVAILABLE => {
                problem.with_detail(messages::SERVICE_UNAVAILABLE_DETAIL)
            }
            _ => problem.with_detail(messages::INTERNAL_ERROR_DETAIL),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.error_code();

        if !code.is_server_error() {
            tracing::info!(error_code = code.code(), error = %self, "Request rejected");
            return self.to_problem().into_response();
        }

        match &self {
            AppError::Database(e) => {
                tracing::error!(error_code = code.code(), error = ?e, "Database error")
            }
            _ => tracing::error!(error_code = code.code(), error = %self, "Unhandled error"),
        }

        let mut response = self.to_problem().into_response();
        response
            .extensions_mut()
            .insert(InternalErrorDetail(self.to_string()));
        response
    }
}

/// Flattens field errors into `{ camelCaseField: [messages] }`.
///
/// A rule without a message falls back to its code.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|err| {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string())
                })
                .collect();
            (camel_case(&field.to_string()), messages)
        })
        .collect()
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
