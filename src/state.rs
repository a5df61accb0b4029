//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::TodoService;
use crate::domain::policy::TodoPolicy;
use crate::domain::repositories::TodoRepository;
use crate::routing::RouteRegistry;

/// Per-process state: one store client and the route registry.
///
/// Cloned per request; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub todo_service: Arc<TodoService>,
    pub routes: Arc<RouteRegistry>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn TodoRepository>,
        policy: TodoPolicy,
        routes: RouteRegistry,
    ) -> Self {
        Self {
            todo_service: Arc::new(TodoService::new(repository, policy)),
            routes: Arc::new(routes),
        }
    }
}
