use async_trait::async_trait;
use database::BaseRepository;
use observability::TodoMetrics;
use sea_orm::{DatabaseConnection, TransactionError, TransactionTrait};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::entity;
use crate::error::{TodoError, TodoResult};
use crate::models::TodoItem;

/// Todo use cases.
///
/// Every write runs in its own transaction: it either commits completely or
/// leaves the store untouched and returns the error that aborted it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoService: Send + Sync {
    async fn get_all_todos(&self) -> TodoResult<Vec<TodoItem>>;

    async fn get_todo_by_id(&self, id: Uuid) -> TodoResult<TodoItem>;

    async fn create_todo(&self, title: String) -> TodoResult<TodoItem>;

    async fn update_todo(&self, id: Uuid, title: String, is_completed: bool) -> TodoResult<()>;

    async fn delete_todo(&self, id: Uuid) -> TodoResult<()>;
}

/// [`TodoService`] over a SeaORM connection pool
#[derive(Clone)]
pub struct DbTodoService {
    db: DatabaseConnection,
    repository: BaseRepository<entity::Entity>,
}

impl DbTodoService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            repository: BaseRepository::new(),
        }
    }
}

#[async_trait]
impl TodoService for DbTodoService {
    #[instrument(skip(self))]
    async fn get_all_todos(&self) -> TodoResult<Vec<TodoItem>> {
        info!("Fetching all todos");

        let models = self.repository.find_all(&self.db).await?;
        Ok(models.into_iter().map(TodoItem::from).collect())
    }

    #[instrument(skip(self), fields(todo_id = %id))]
    async fn get_todo_by_id(&self, id: Uuid) -> TodoResult<TodoItem> {
        info!("Fetching todo");

        match self.repository.find_by_id(&self.db, id).await? {
            Some(model) => Ok(model.into()),
            None => {
                warn!("Todo not found");
                Err(TodoError::not_found(id))
            }
        }
    }

    #[instrument(skip(self, title))]
    async fn create_todo(&self, title: String) -> TodoResult<TodoItem> {
        info!("Creating todo");

        let repository = self.repository;
        let created = self
            .db
            .transaction::<_, TodoItem, TodoError>(move |txn| {
                Box::pin(async move {
                    let todo = TodoItem::create(title)?;
                    let model = repository
                        .insert(txn, entity::ActiveModel::from(&todo))
                        .await?;
                    Ok(model.into())
                })
            })
            .await
            .map_err(|e| rolled_back("create", e))?;

        TodoMetrics::record_created();
        info!(todo_id = %created.id(), "Todo created");
        Ok(created)
    }

    #[instrument(skip(self, title), fields(todo_id = %id))]
    async fn update_todo(&self, id: Uuid, title: String, is_completed: bool) -> TodoResult<()> {
        info!(is_completed, "Updating todo");

        let repository = self.repository;
        self.db
            .transaction::<_, (), TodoError>(move |txn| {
                Box::pin(async move {
                    let mut todo: TodoItem = repository
                        .find_by_id(txn, id)
                        .await?
                        .ok_or_else(|| TodoError::not_found(id))?
                        .into();

                    todo.update(title, is_completed)?;
                    repository
                        .update(txn, entity::ActiveModel::from(&todo))
                        .await?;
                    Ok(())
                })
            })
            .await
            .map_err(|e| rolled_back("update", e))?;

        TodoMetrics::record_updated();
        info!("Todo updated");
        Ok(())
    }

    #[instrument(skip(self), fields(todo_id = %id))]
    async fn delete_todo(&self, id: Uuid) -> TodoResult<()> {
        info!("Deleting todo");

        let repository = self.repository;
        self.db
            .transaction::<_, (), TodoError>(move |txn| {
                Box::pin(async move {
                    let model = repository
                        .find_by_id(txn, id)
                        .await?
                        .ok_or_else(|| TodoError::not_found(id))?;

                    let removed = repository
                        .delete(txn, entity::ActiveModel::from(&TodoItem::from(model)))
                        .await?;
                    if removed == 0 {
                        return Err(TodoError::not_found(id));
                    }
                    Ok(())
                })
            })
            .await
            .map_err(|e| rolled_back("delete", e))?;

        TodoMetrics::record_deleted();
        info!("Todo deleted");
        Ok(())
    }
}

/// The transaction has already been rolled back when this runs.
fn rolled_back(operation: &'static str, err: TransactionError<TodoError>) -> TodoError {
    let err = match err {
        TransactionError::Connection(e) => TodoError::Database(e),
        TransactionError::Transaction(e) => e,
    };
    TodoMetrics::record_failed(operation);
    error!(operation, error = %err, "Transaction rolled back");
    err
}
