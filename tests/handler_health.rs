mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use todo_api::AppError;
use todo_api::domain::entities::{NewTodo, Todo, TodoFilter, TodoId};
use todo_api::domain::policy::TodoPolicy;
use todo_api::domain::repositories::TodoRepository;
use todo_api::routes::router;

/// Store whose every call fails.
struct UnreachableRepository;

#[async_trait]
impl TodoRepository for UnreachableRepository {
    async fn list(&self, _filter: TodoFilter) -> Result<Vec<Todo>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_by_id(&self, _id: TodoId) -> Result<Option<Todo>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn create(&self, _new_todo: NewTodo) -> Result<Todo, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn update(&self, _todo: &Todo) -> Result<bool, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn delete(&self, _id: TodoId) -> Result<bool, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(AppError::internal("connection refused"))
    }
}

fn unreachable_server() -> TestServer {
    let state = common::create_test_state(Arc::new(UnreachableRepository), TodoPolicy::default());
    TestServer::new(router(state)).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::default_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[sqlx::test]
async fn test_health_endpoint_postgres(pool: PgPool) {
    let server = TestServer::new(router(common::create_pg_state(pool))).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_store_down() {
    let server = unreachable_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_store_failure_hides_details() {
    let server = unreachable_server();

    let response = server.get("/api/todos").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text();
    assert!(!body.contains("connection refused"));
}
