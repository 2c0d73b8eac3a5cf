//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes the body as JSON, then runs [`Validate::validate`].
///
/// - malformed JSON or a missing `Content-Type` → 400 "Bad Request" problem
/// - rule violations → 400 "Validation Error" problem listing every field
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateTodo {
///     #[validate(required(message = "Title is required"))]
///     title: Option<String>,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateTodo>) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
