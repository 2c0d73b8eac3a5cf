use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::TodoItem;

/// Row of the `todo_items` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todo_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub title: String,
    pub is_completed: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Stored rows are trusted; rehydration skips the title checks.
impl From<Model> for TodoItem {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            is_completed: model.is_completed,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<&TodoItem> for ActiveModel {
    fn from(todo: &TodoItem) -> Self {
        ActiveModel {
            id: Set(todo.id),
            title: Set(todo.title.clone()),
            is_completed: Set(todo.is_completed),
            created_at: Set(todo.created_at.fixed_offset()),
        }
    }
}
