use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::{TodoError, TodoResult};

/// Longest accepted title, in characters
pub const TITLE_MAX_LEN: usize = 100;

pub const TITLE_EMPTY_MESSAGE: &str = "Title cannot be empty";
pub const TITLE_TOO_LONG_MESSAGE: &str = "Title cannot be longer than 100 characters";
pub const TITLE_REQUIRED_MESSAGE: &str = "Title is required";
pub const IS_COMPLETED_REQUIRED_MESSAGE: &str = "IsCompleted is required";

/// A todo item.
///
/// Built through [`TodoItem::create`] and changed through
/// [`TodoItem::update`], both of which reject blank titles and titles longer
/// than [`TITLE_MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub(crate) id: Uuid,
    pub(crate) title: String,
    pub(crate) is_completed: bool,
    pub(crate) created_at: DateTime<Utc>,
}

impl TodoItem {
    /// New, not yet completed item with a fresh time-ordered id.
    pub fn create(title: String) -> TodoResult<Self> {
        check_title(&title)?;

        Ok(Self {
            id: Uuid::now_v7(),
            title,
            is_completed: false,
            created_at: Utc::now(),
        })
    }

    /// Replaces title and completion together. Leaves `self` untouched on error.
    pub fn update(&mut self, title: String, is_completed: bool) -> TodoResult<()> {
        check_title(&title)?;

        self.title = title;
        self.is_completed = is_completed;
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn check_title(title: &str) -> TodoResult<()> {
    if title.trim().is_empty() {
        return Err(TodoError::InvalidArgument(TITLE_EMPTY_MESSAGE.to_string()));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(TodoError::InvalidArgument(
            TITLE_TOO_LONG_MESSAGE.to_string(),
        ));
    }
    Ok(())
}

fn validate_title_not_blank(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(TITLE_REQUIRED_MESSAGE.into()));
    }
    Ok(())
}

/// Todo as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
    #[ts(as = "String")]
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /todos`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoDto {
    #[validate(
        required(message = "Title is required"),
        custom(function = "validate_title_not_blank"),
        length(max = 100, message = "Title cannot be longer than 100 characters")
    )]
    #[schema(example = "Buy milk", max_length = 100)]
    pub title: Option<String>,
}

/// Body of `PUT /todos/{id}`; both fields are required
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoDto {
    #[validate(
        required(message = "Title is required"),
        custom(function = "validate_title_not_blank"),
        length(max = 100, message = "Title cannot be longer than 100 characters")
    )]
    #[schema(example = "Buy milk", max_length = 100)]
    pub title: Option<String>,
    #[validate(required(message = "IsCompleted is required"))]
    #[schema(example = true)]
    pub is_completed: Option<bool>,
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResultDto<T> {
    pub items: Vec<T>,
    /// Size of the whole result set, not of this page
    pub total_count: usize,
    pub page_number: i32,
    pub page_size: i32,
}

/// `?page=&pageSize=` on the list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    #[param(default = 1)]
    pub page: i32,
    #[serde(default = "default_page_size")]
    #[param(default = 10)]
    pub page_size: i32,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PaginationQuery {
    /// Rows before this page. A page below 1 skips nothing.
    pub fn skip(&self) -> usize {
        let pages_before = i64::from(self.page).saturating_sub(1).max(0);
        let skipped = pages_before.saturating_mul(i64::from(self.page_size.max(0)));
        usize::try_from(skipped).unwrap_or(usize::MAX)
    }

    /// Rows on this page. A negative size takes nothing.
    pub fn take(&self) -> usize {
        usize::try_from(self.page_size).unwrap_or(0)
    }
}
