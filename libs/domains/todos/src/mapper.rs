//! Conversions between [`TodoItem`] and the wire DTOs.

use crate::error::{TodoError, TodoResult};
use crate::models::{
    CreateTodoDto, IS_COMPLETED_REQUIRED_MESSAGE, PagedResultDto, PaginationQuery,
    TITLE_REQUIRED_MESSAGE, TodoDto, TodoItem, UpdateTodoDto,
};

impl From<&TodoItem> for TodoDto {
    fn from(todo: &TodoItem) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            is_completed: todo.is_completed,
            created_at: todo.created_at,
        }
    }
}

impl From<TodoItem> for TodoDto {
    fn from(todo: TodoItem) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            is_completed: todo.is_completed,
            created_at: todo.created_at,
        }
    }
}

/// Goes through [`TodoItem::create`], so the title rules still apply.
impl TryFrom<CreateTodoDto> for TodoItem {
    type Error = TodoError;

    fn try_from(dto: CreateTodoDto) -> TodoResult<Self> {
        TodoItem::create(dto.title.unwrap_or_default())
    }
}

impl From<&TodoDto> for UpdateTodoDto {
    fn from(dto: &TodoDto) -> Self {
        Self {
            title: Some(dto.title.clone()),
            is_completed: Some(dto.is_completed),
        }
    }
}

impl UpdateTodoDto {
    /// Title and completion flag, both required.
    pub fn into_parts(self) -> TodoResult<(String, bool)> {
        let title = self
            .title
            .ok_or_else(|| TodoError::InvalidArgument(TITLE_REQUIRED_MESSAGE.to_string()))?;
        let is_completed = self
            .is_completed
            .ok_or_else(|| TodoError::InvalidArgument(IS_COMPLETED_REQUIRED_MESSAGE.to_string()))?;
        Ok((title, is_completed))
    }

    /// Replaces title and completion on `todo`; id and creation time are kept.
    pub fn apply_to(&self, todo: &mut TodoItem) -> TodoResult<()> {
        let (title, is_completed) = self.clone().into_parts()?;
        todo.update(title, is_completed)
    }
}

impl<T> PagedResultDto<T> {
    /// Slices `all` to the requested page and echoes the request values.
    pub fn from_page<S>(all: Vec<S>, query: PaginationQuery) -> Self
    where
        T: From<S>,
    {
        let total_count = all.len();
        let items = all
            .into_iter()
            .skip(query.skip())
            .take(query.take())
            .map(T::from)
            .collect();

        Self {
            items,
            total_count,
            page_number: query.page,
            page_size: query.page_size,
        }
    }
}
