//! In-memory `TodoStore` used by the integration tests.
//!
//! Same contract as the MySQL store: ids are assigned once and never reused,
//! soft-deleted rows stay in the map but are invisible to every operation,
//! and `update` is a full overwrite. Results are sorted by id so tests are
//! deterministic — callers must not rely on ordering.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::RepositoryError;
use crate::repository::TodoStore;
use crate::todo::{Status, Todo};

#[derive(Default)]
pub struct MemoryTodoRepository {
    todos: RwLock<HashMap<i64, Todo>>,
    next_id: AtomicI64,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoRepository {
    async fn create(
        &self,
        title: String,
        description: String,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Todo, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let now = Utc::now();
        let todo = Todo {
            id,
            title,
            description: Some(description),
            due_date,
            status: Status::Pending,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.todos.write().await.insert(id, todo.clone());
        Ok(todo)
    }

    async fn update(
        &self,
        id: i64,
        title: String,
        description: String,
        due_date: Option<DateTime<Utc>>,
        status: Status,
    ) -> Result<Todo, RepositoryError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .get_mut(&id)
            .filter(|t| t.deleted_at.is_none())
            .ok_or(RepositoryError::NotFound(id))?;

        todo.title = title;
        todo.description = Some(description);
        todo.due_date = due_date;
        todo.status = status;
        todo.updated_at = Utc::now();
        Ok(todo.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .get_mut(&id)
            .filter(|t| t.deleted_at.is_none())
            .ok_or(RepositoryError::NotFound(id))?;

        todo.deleted_at = Some(Utc::now());
        Ok(())
    }

    async fn list(&self, status: Option<Status>) -> Result<Vec<Todo>, RepositoryError> {
        let todos = self.todos.read().await;
        let mut out: Vec<Todo> = todos
            .values()
            .filter(|t| t.deleted_at.is_none())
            .filter(|t| status.map_or(true, |s| t.status == s))
            .cloned()
            .collect();
        out.sort_by_key(|t| t.id);
        Ok(out)
    }
}
