//! Redis-backed document store for todos.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::entities::{NewTodo, Todo, TodoFilter, TodoId};
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;

/// Stores each todo as one JSON document keyed by its id.
///
/// # Key layout
///
/// - `todo:{id}` - the JSON document (`{"id":..,"title":..,"isComplete":..}`)
/// - `todo:ids`  - set of every stored id, used for listing and bulk delete
///
/// Writes that touch both keys run in a `MULTI` pipeline.
pub struct RedisTodoRepository {
    conn: ConnectionManager,
    key_prefix: String,
    index_key: String,
}

impl RedisTodoRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("✓ Connected to Redis");

        Ok(Self::new(manager))
    }

    pub fn new(conn: ConnectionManager) -> Self {
        Self {
            conn,
            key_prefix: "todo:".to_string(),
            index_key: "todo:ids".to_string(),
        }
    }

    fn document_key(&self, id: &str) -> String {
        format!("{}{}", self.key_prefix, id)
    }

    async fn all_ids(&self) -> Result<Vec<String>, AppError> {
        let mut conn = self.conn.clone();
        let ids: Vec<String> = conn.smembers(&self.index_key).await?;
        Ok(ids)
    }

    /// Removes the documents of `ids` and only those ids from the index, so a
    /// todo created after `ids` was read stays listed.
    async fn delete_ids(&self, ids: &[String]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let keys: Vec<String> = ids.iter().map(|id| self.document_key(id)).collect();
        let mut conn = self.conn.clone();
        let (deleted, _): (i64, i64) = redis::pipe()
            .atomic()
            .del(&keys)
            .srem(&self.index_key, ids)
            .query_async(&mut conn)
            .await?;

        Ok(u64::try_from(deleted).unwrap_or(0))
    }
}

#[async_trait]
impl TodoRepository for RedisTodoRepository {
    async fn list(&self, filter: TodoFilter) -> Result<Vec<Todo>, AppError> {
        let ids = self.all_ids().await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<String> = ids.iter().map(|id| self.document_key(id)).collect();
        let mut conn = self.conn.clone();
        let documents: Vec<Option<String>> = conn.mget(&keys).await?;

        let mut todos = Vec::with_capacity(documents.len());
        for document in documents.into_iter().flatten() {
            let todo: Todo = serde_json::from_str(&document)?;
            if filter.matches(&todo) {
                todos.push(todo);
            }
        }

        todos.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(todos)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, AppError> {
        let key = self.document_key(&id.to_string());
        let mut conn = self.conn.clone();

        let document: Option<String> = conn.get(&key).await?;
        match document {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => {
                debug!("Document MISS: {}", key);
                Ok(None)
            }
        }
    }

    async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError> {
        let todo = new_todo.into_todo();
        let id = todo.id.to_string();
        let document = serde_json::to_string(&todo)?;
        let mut conn = self.conn.clone();

        let (written, _): (bool, i64) = redis::pipe()
            .atomic()
            .set_nx(self.document_key(&id), &document)
            .sadd(&self.index_key, &id)
            .query_async(&mut conn)
            .await?;

        if !written {
            return Err(AppError::internal(format!(
                "Todo with id {} already exists",
                id
            )));
        }

        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> Result<bool, AppError> {
        let key = self.document_key(&todo.id.to_string());
        let document = serde_json::to_string(todo)?;
        let mut conn = self.conn.clone();

        // XX: only overwrite an existing document.
        let reply: Option<String> = redis::cmd("SET")
            .arg(&key)
            .arg(&document)
            .arg("XX")
            .query_async(&mut conn)
            .await?;

        Ok(reply.is_some())
    }

    async fn delete(&self, id: TodoId) -> Result<bool, AppError> {
        let id = id.to_string();
        let mut conn = self.conn.clone();

        let (deleted, _): (i64, i64) = redis::pipe()
            .atomic()
            .del(self.document_key(&id))
            .srem(&self.index_key, &id)
            .query_async(&mut conn)
            .await?;

        Ok(deleted > 0)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let ids = self.all_ids().await?;
        self.delete_ids(&ids).await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    async fn connect() -> Option<RedisTodoRepository> {
        let url = std::env::var("REDIS_URL").ok()?;
        let repo = RedisTodoRepository::connect(&url).await.unwrap();
        repo.delete_all().await.unwrap();
        Some(repo)
    }

    #[tokio::test]
    #[serial]
    async fn test_bulk_delete_keeps_todo_created_after_snapshot() {
        let Some(repo) = connect().await else {
            return;
        };

        repo.create(NewTodo::new("old")).await.unwrap();
        let snapshot = repo.all_ids().await.unwrap();

        let late = repo.create(NewTodo::new("late")).await.unwrap();
        assert_eq!(repo.delete_ids(&snapshot).await.unwrap(), 1);

        assert_eq!(repo.list(TodoFilter::All).await.unwrap(), vec![late.clone()]);
        assert_eq!(repo.find_by_id(late.id).await.unwrap(), Some(late));

        assert_eq!(repo.delete_all().await.unwrap(), 1);
    }
}
