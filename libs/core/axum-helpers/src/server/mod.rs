//! Server infrastructure: router assembly, health endpoints, graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{
//!     RouterOptions, compose_routes, create_production_app, health_router, with_common_layers,
//! };
//!
//! let options = RouterOptions::for_environment(&env);
//! let routes = compose_routes::<ApiDoc>(api_routes, options).merge(health_router(app_info!()));
//! let router = with_common_layers(routes, options)?;
//!
//! create_production_app(router, &server_config, async move {
//!     db.close().await.ok();
//! })
//! .await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{
    RouterOptions, compose_routes, create_production_app, create_router, with_common_layers,
};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
