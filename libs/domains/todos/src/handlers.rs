use axum::{
    Json, Router,
    extract::{OriginalUri, Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;

use crate::error::TodoResult;
use crate::models::{CreateTodoDto, PagedResultDto, PaginationQuery, TodoDto, UpdateTodoDto};
use crate::service::TodoService;

pub const TAG: &str = "todos";

/// OpenAPI documentation for the Todos API
#[derive(OpenApi)]
#[openapi(
    paths(list_todos, get_todo, create_todo, update_todo, delete_todo),
    components(
        schemas(TodoDto, CreateTodoDto, UpdateTodoDto),
        responses(
            BadRequestResponse,
            BadRequestValidationResponse,
            NotFoundResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Todo management endpoints")
    )
)]
pub struct TodosApiDoc;

/// Routes relative to the mount point (`/todos` in the app)
pub fn router<S: TodoService + 'static>(service: S) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_todos::<S>).post(create_todo::<S>))
        .route(
            "/{id}",
            get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>),
        )
        .with_state(shared_service)
}

/// List todos, one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Requested page of todos", body = PagedResultDto<TodoDto>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_todos<S: TodoService>(
    State(service): State<Arc<S>>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<Json<PagedResultDto<TodoDto>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    info!(page = query.page, page_size = query.page_size, "Listing todos");

    let todos = service.get_all_todos().await?;
    Ok(Json(PagedResultDto::from_page(todos, query)))
}

/// Get a todo by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo found", body = TodoDto),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_todo<S: TodoService>(
    State(service): State<Arc<S>>,
    UuidPath(id): UuidPath,
) -> TodoResult<Json<TodoDto>> {
    info!(todo_id = %id, "Getting todo");

    let todo = service.get_todo_by_id(id).await?;
    Ok(Json(todo.into()))
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateTodoDto,
    responses(
        (status = 201, description = "Todo created", body = TodoDto,
            headers(("Location" = String, description = "URL of the new todo"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_todo<S: TodoService>(
    State(service): State<Arc<S>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(input): ValidatedJson<CreateTodoDto>,
) -> TodoResult<impl IntoResponse> {
    info!("Creating todo");

    let todo = service.create_todo(input.title.unwrap_or_default()).await?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), todo.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoDto::from(todo)),
    ))
}

/// Replace a todo's title and completion
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Todo ID")
    ),
    request_body = UpdateTodoDto,
    responses(
        (status = 204, description = "Todo updated"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_todo<S: TodoService>(
    State(service): State<Arc<S>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateTodoDto>,
) -> TodoResult<StatusCode> {
    info!(todo_id = %id, "Updating todo");

    let (title, is_completed) = input.into_parts()?;
    service.update_todo(id, title, is_completed).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Todo ID")
    ),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_todo<S: TodoService>(
    State(service): State<Arc<S>>,
    UuidPath(id): UuidPath,
) -> TodoResult<StatusCode> {
    info!(todo_id = %id, "Deleting todo");

    service.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::models::TodoItem;
    use crate::service::MockTodoService;
    use axum::body::Body;
    use axum::http::Request;
    use axum_helpers::ProblemDetails;
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use sea_orm::DbErr;
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_returns_dto() {
        let todo = TodoItem::create("Buy milk".to_string()).unwrap();
        let id = todo.id();

        let mut mock = MockTodoService::new();
        mock.expect_get_todo_by_id()
            .with(eq(id))
            .times(1)
            .returning(move |_| Ok(todo.clone()));

        let response = router(mock)
            .oneshot(Request::get(format!("/{id}")).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let dto: TodoDto = json_body(response.into_body()).await;
        assert_eq!(dto.id, id);
        assert_eq!(dto.title, "Buy milk");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_404_problem() {
        let id = Uuid::now_v7();
        let mut mock = MockTodoService::new();
        mock.expect_get_todo_by_id()
            .returning(|id| Err(TodoError::not_found(id)));

        let response = router(mock)
            .oneshot(Request::get(format!("/{id}")).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let problem: ProblemDetails = json_body(response.into_body()).await;
        assert_eq!(problem.title, "Not Found");
        assert_eq!(
            problem.detail.unwrap(),
            format!("TodoItem with id {id} was not found")
        );
    }

    #[tokio::test]
    async fn test_malformed_id_never_reaches_service() {
        let mut mock = MockTodoService::new();
        mock.expect_delete_todo().never();

        let response = router(mock)
            .oneshot(
                Request::delete("/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_returns_201_with_location() {
        let mut mock = MockTodoService::new();
        mock.expect_create_todo()
            .with(eq("Buy milk".to_string()))
            .times(1)
            .returning(TodoItem::create);

        let response = router(mock)
            .oneshot(json_request("POST", "/", serde_json::json!({ "title": "Buy milk" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response.headers()[header::LOCATION]
            .to_str()
            .unwrap()
            .to_string();
        let dto: TodoDto = json_body(response.into_body()).await;
        assert_eq!(location, format!("/{}", dto.id));
        assert!(!dto.is_completed);
    }

    #[tokio::test]
    async fn test_create_validation_failure_lists_fields() {
        let mut mock = MockTodoService::new();
        mock.expect_create_todo().never();

        let response = router(mock)
            .oneshot(json_request("POST", "/", serde_json::json!({ "title": "   " })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let problem: ProblemDetails = json_body(response.into_body()).await;
        assert_eq!(problem.title, "Validation Error");
        assert_eq!(problem.errors.unwrap()["title"], vec!["Title is required"]);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400_problem() {
        let mut mock = MockTodoService::new();
        mock.expect_create_todo().never();

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from("{\"title\": "))
            .unwrap();
        let response = router(mock).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/problem+json"
        );
    }

    #[tokio::test]
    async fn test_update_returns_204() {
        let id = Uuid::now_v7();
        let mut mock = MockTodoService::new();
        mock.expect_update_todo()
            .with(eq(id), eq("Buy milk".to_string()), eq(true))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let response = router(mock)
            .oneshot(json_request(
                "PUT",
                &format!("/{id}"),
                serde_json::json!({ "title": "Buy milk", "isCompleted": true }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_update_requires_completion_flag() {
        let mut mock = MockTodoService::new();
        mock.expect_update_todo().never();

        let response = router(mock)
            .oneshot(json_request(
                "PUT",
                &format!("/{}", Uuid::now_v7()),
                serde_json::json!({ "title": "Buy milk" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let problem: ProblemDetails = json_body(response.into_body()).await;
        assert_eq!(
            problem.errors.unwrap()["isCompleted"],
            vec!["IsCompleted is required"]
        );
    }

    #[tokio::test]
    async fn test_delete_returns_204() {
        let id = Uuid::now_v7();
        let mut mock = MockTodoService::new();
        mock.expect_delete_todo()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        let response = router(mock)
            .oneshot(Request::delete(format!("/{id}")).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_list_defaults_to_first_page_of_ten() {
        let mut mock = MockTodoService::new();
        mock.expect_get_all_todos().times(1).returning(|| {
            Ok((1..=25)
                .map(|i| TodoItem::create(format!("Todo {i:02}")).unwrap())
                .collect())
        });

        let response = router(mock)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page: PagedResultDto<TodoDto> = json_body(response.into_body()).await;
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_count, 25);
        assert_eq!((page.page_number, page.page_size), (1, 10));
    }

    #[tokio::test]
    async fn test_list_with_bad_query_is_400_problem() {
        let mut mock = MockTodoService::new();
        mock.expect_get_all_todos().never();

        let response = router(mock)
            .oneshot(Request::get("/?page=first").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let problem: ProblemDetails = json_body(response.into_body()).await;
        assert_eq!(problem.title, "Bad Request");
    }

    #[tokio::test]
    async fn test_store_failure_is_generic_500() {
        let mut mock = MockTodoService::new();
        mock.expect_get_all_todos()
            .returning(|| Err(TodoError::Database(DbErr::Custom("disk full".into()))));

        let response = router(mock)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let problem: ProblemDetails = json_body(response.into_body()).await;
        assert_eq!(
            problem.detail.as_deref(),
            Some("An error occurred while processing your request.")
        );
    }
}
