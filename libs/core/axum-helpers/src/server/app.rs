use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{cors_layer_from_env, expose_internal_errors, security_headers};
use axum::{Router, middleware};
use core_config::{Environment, server::ServerConfig};
use std::future::Future;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Environment-dependent switches for [`create_router`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterOptions {
    /// Mount Swagger UI, ReDoc, RapiDoc and Scalar
    pub expose_docs: bool,
    /// Put the underlying error text in 5xx problem details
    pub expose_internal_errors: bool,
}

impl RouterOptions {
    /// Both switches on in development, off in production.
    pub fn for_environment(environment: &Environment) -> Self {
        let development = environment.is_development();
        Self {
            expose_docs: development,
            expose_internal_errors: development,
        }
    }
}

/// Wraps the API routes with the cross-cutting layers.
///
/// Same as [`compose_routes`] followed by [`with_common_layers`]. Apps that
/// serve extra top-level routes (health, metrics) call the two steps
/// themselves and merge in between, so those routes get the layers too.
///
/// # Errors
/// `CORS_ALLOWED_ORIGIN` is set but contains an invalid origin.
pub fn create_router<T>(apis: Router, options: RouterOptions) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    with_common_layers(compose_routes::<T>(apis, options), options)
}

/// `apis` nested under `/api`, problem+json fallbacks for unknown routes and
/// methods, and the OpenAPI document and UIs (`/swagger-ui`, `/redoc`,
/// `/rapidoc`, `/scalar`) when [`RouterOptions::expose_docs`] is set.
pub fn compose_routes<T>(apis: Router, options: RouterOptions) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let router = Router::new()
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed);

    if !options.expose_docs {
        return router;
    }

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
}

/// Development error detail, request tracing, security headers, optional
/// CORS (`CORS_ALLOWED_ORIGIN`) and compression over every route of `router`.
///
/// # Errors
/// `CORS_ALLOWED_ORIGIN` is set but contains an invalid origin.
pub fn with_common_layers(router: Router, options: RouterOptions) -> io::Result<Router> {
    let cors_layer =
        cors_layer_from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut router = router;
    if options.expose_internal_errors {
        warn!("Internal error details are exposed in responses");
        router = router.layer(middleware::from_fn(expose_internal_errors));
    }

    let router = router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    let router = match cors_layer {
        Some(cors) => router.layer(cors),
        None => router,
    };

    Ok(router.layer(CompressionLayer::new()))
}

/// Serves `router` until SIGINT/SIGTERM, lets in-flight requests finish,
/// then runs `cleanup` bounded by [`ServerConfig::shutdown_timeout`].
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let signal_listener = tokio::spawn({
        let coordinator = coordinator.clone();
        async move { coordinator.wait_for_signal().await }
    });

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown({
            let coordinator = coordinator.clone();
            async move { coordinator.wait().await }
        })
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Server encountered an error"));

    signal_listener.abort();

    let timeout = server_config.shutdown_timeout;
    info!(?timeout, "Running shutdown cleanup");
    match tokio::time::timeout(timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed"),
        Err(_) => warn!(?timeout, "Cleanup exceeded timeout, forcing shutdown"),
    }

    serve_result
}
