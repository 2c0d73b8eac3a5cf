use axum::Router;
use domain_todos::{DbTodoService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let service = DbTodoService::new(state.db.clone());
    handlers::router(service)
}
