//! Todos Domain
//!
//! CRUD over a single `TodoItem` resource.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP routes, validation, pagination
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Use cases, one transaction per write
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← database::BaseRepository<entity::Entity>
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← TodoItem, DTOs (mapper converts between them)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{DbTodoService, handlers};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite::memory:").await?;
//!
//! let service = DbTodoService::new(db);
//! let routes = axum::Router::new().nest("/todos", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{TodoError, TodoResult};
pub use handlers::TodosApiDoc;
pub use models::{CreateTodoDto, PagedResultDto, PaginationQuery, TodoDto, TodoItem, UpdateTodoDto};
pub use service::{DbTodoService, TodoService};
