//! Todo HTTP service: configuration, state and router assembly.
//!
//! `main` loads [`config::Config`], connects, and serves [`app`].

use axum::{Router, middleware};
use axum_helpers::server::{RouterOptions, compose_routes, health_router, with_common_layers};
use std::io;

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use state::AppState;

/// The full application router.
///
/// - `/api/todos/...` with docs UIs and error detail per environment
/// - `/health` liveness with app name/version
/// - `/ready` database readiness, `/metrics` Prometheus scrape
///
/// Every route, operational ones included, sits behind the shared layers.
pub fn app(state: &AppState) -> io::Result<Router> {
    let options = RouterOptions::for_environment(&state.config.environment);
    let routes = compose_routes::<openapi::ApiDoc>(api::routes(state), options)
        .merge(health_router(state.config.app))
        .merge(api::operational_router(state.clone()));

    Ok(with_common_layers(routes, options)?
        .layer(middleware::from_fn(observability::metrics_middleware)))
}
