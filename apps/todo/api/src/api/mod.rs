use axum::{Router, routing::get};

pub mod health;
pub mod todos;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by `compose_routes`.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/todos", todos::router(state))
}

/// `/ready` (database round trip) and `/metrics` (Prometheus text format).
///
/// Mounted next to, not under, the `/api` prefix.
pub fn operational_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
        .route("/metrics", get(observability::metrics_handler))
}
