mod common;

use sqlx::PgPool;
use std::sync::Arc;
use todo_api::domain::entities::{NewTodo, TodoFilter, TodoId};
use todo_api::domain::repositories::TodoRepository;
use todo_api::infrastructure::persistence::PgTodoRepository;

fn repo(pool: PgPool) -> PgTodoRepository {
    PgTodoRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_create_todo(pool: PgPool) {
    let repo = repo(pool);

    let result = repo.create(NewTodo::new("Buy milk")).await;

    assert!(result.is_ok());
    let todo = result.unwrap();
    assert_eq!(todo.title, "Buy milk");
    assert!(!todo.is_complete);
}

#[sqlx::test]
async fn test_create_with_client_id(pool: PgPool) {
    let repo = repo(pool);
    let id = TodoId::new();

    let todo = repo
        .create(NewTodo {
            id: Some(id),
            ..NewTodo::new("Fixed id")
        })
        .await
        .unwrap();

    assert_eq!(todo.id, id);
}

#[sqlx::test]
async fn test_create_duplicate_id_fails(pool: PgPool) {
    let repo = repo(pool);
    let id = TodoId::new();

    repo.create(NewTodo {
        id: Some(id),
        ..NewTodo::new("first")
    })
    .await
    .unwrap();

    let result = repo
        .create(NewTodo {
            id: Some(id),
            ..NewTodo::new("second")
        })
        .await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn test_blank_title_rejected_by_schema(pool: PgPool) {
    let result = sqlx::query("INSERT INTO todos (id, title) VALUES (gen_random_uuid(), '  ')")
        .execute(&pool)
        .await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let repo = repo(pool);
    let created = repo.create(NewTodo::new("Find me")).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(found, Some(created));
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = repo(pool);

    let found = repo.find_by_id(TodoId::new()).await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_list_filters_by_completion(pool: PgPool) {
    let repo = repo(pool);
    repo.create(NewTodo::new("b open")).await.unwrap();
    repo.create(NewTodo {
        is_complete: true,
        ..NewTodo::new("a done")
    })
    .await
    .unwrap();
    repo.create(NewTodo::new("c open")).await.unwrap();

    let all = repo.list(TodoFilter::All).await.unwrap();
    let complete = repo.list(TodoFilter::Complete).await.unwrap();
    let incomplete = repo.list(TodoFilter::Incomplete).await.unwrap();

    let titles: Vec<_> = all.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["a done", "b open", "c open"]);
    assert_eq!(complete.len(), 1);
    assert_eq!(incomplete.len(), 2);
    assert!(incomplete.iter().all(|t| !t.is_complete));
}

#[sqlx::test]
async fn test_update(pool: PgPool) {
    let repo = repo(pool);
    let mut todo = repo.create(NewTodo::new("old")).await.unwrap();

    todo.title = "new".to_string();
    todo.is_complete = true;
    let updated = repo.update(&todo).await.unwrap();

    assert!(updated);
    assert_eq!(repo.find_by_id(todo.id).await.unwrap(), Some(todo));
}

#[sqlx::test]
async fn test_update_missing(pool: PgPool) {
    let repo = repo(pool);
    let ghost = common::todo("ghost", false);

    assert!(!repo.update(&ghost).await.unwrap());
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let repo = repo(pool);
    let todo = repo.create(NewTodo::new("bye")).await.unwrap();

    assert!(repo.delete(todo.id).await.unwrap());
    assert!(!repo.delete(todo.id).await.unwrap());
    assert!(repo.find_by_id(todo.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete_all(pool: PgPool) {
    let repo = repo(pool);
    repo.create(NewTodo::new("a")).await.unwrap();
    repo.create(NewTodo::new("b")).await.unwrap();

    assert_eq!(repo.delete_all().await.unwrap(), 2);
    assert!(repo.list(TodoFilter::All).await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_health_check(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.health_check().await.is_ok());
}
