//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS, security headers, development error detail
//! - **[`errors`]**: [`AppError`] and RFC 7807 [`ProblemDetails`] responses
//! - **[`extractors`]**: [`UuidPath`] and [`ValidatedJson`]

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, RouterOptions, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer_from_env, create_cors_layer, expose_internal_errors, security_headers};

pub use errors::{AppError, ErrorCode, InternalErrorDetail, ProblemDetails};

pub use extractors::{UuidPath, ValidatedJson};
