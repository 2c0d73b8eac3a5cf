use axum_helpers::ProblemDetails;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(ProblemDetails)
    ),
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "Create, list, update and delete todo items"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/todos", api = domain_todos::TodosApiDoc)
    )
)]
pub struct ApiDoc;
