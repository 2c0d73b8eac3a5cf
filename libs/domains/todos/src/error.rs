use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TodoError {
    /// A title rule was broken at the entity boundary
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{entity} with id {id} was not found")]
    NotFound { entity: &'static str, id: Uuid },

    /// A write reached the repository without a primary key
    #[error("Value cannot be null. (Parameter '{0}')")]
    NullArgument(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type TodoResult<T> = Result<T, TodoError>;

impl TodoError {
    pub fn not_found(id: Uuid) -> Self {
        TodoError::NotFound {
            entity: "TodoItem",
            id,
        }
    }
}

impl From<DatabaseError> for TodoError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Db(e) => TodoError::Database(e),
            DatabaseError::NullArgument(param) => TodoError::NullArgument(param),
            other => TodoError::Database(DbErr::Custom(other.to_string())),
        }
    }
}

/// Convert TodoError to AppError for standardized error responses
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound { .. } => AppError::NotFound(err.to_string()),
            TodoError::InvalidArgument(msg) => AppError::BadRequest(msg),
            TodoError::NullArgument(_) => AppError::InternalServerError(err.to_string()),
            TodoError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
