//! MySQL-backed `TodoStore`.
//!
//! Every operation is a single statement (plus the fetch-then-write pattern
//! for update and delete). `created_at` and `updated_at` are maintained by
//! the schema (`DEFAULT CURRENT_TIMESTAMP` / `ON UPDATE CURRENT_TIMESTAMP`),
//! so writes are followed by a re-fetch to return store-set values.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::{FromRow, Row};
use tracing::error;

use crate::error::RepositoryError;
use crate::repository::TodoStore;
use crate::todo::{ParseStatusError, Status, Todo};

const SELECT_TODO: &str = "SELECT id, title, description, due_date, status, \
     created_at, updated_at, deleted_at FROM todos";

impl FromRow<'_, MySqlRow> for Todo {
    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        let status = status
            .parse::<Status>()
            .map_err(|e: ParseStatusError| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;
        Ok(Todo {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            due_date: row.try_get("due_date")?,
            status,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
        })
    }
}

pub struct MySqlTodoRepository {
    pool: MySqlPool,
}

impl MySqlTodoRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Fetch a row by id, treating soft-deleted rows as absent. Update and
    /// delete both go through here, so operating on a soft-deleted id fails
    /// with `NotFound` instead of silently resurrecting the row.
    async fn fetch_live(&self, id: i64) -> Result<Todo, RepositoryError> {
        let query = format!("{SELECT_TODO} WHERE id = ? AND deleted_at IS NULL");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound(id))
    }
}

#[async_trait]
impl TodoStore for MySqlTodoRepository {
    async fn create(
        &self,
        title: String,
        description: String,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Todo, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO todos (title, description, due_date, status) VALUES (?, ?, ?, ?)",
        )
        .bind(&title)
        .bind(&description)
        .bind(due_date)
        .bind(Status::Pending.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(title = %title, error = %e, "database error on create");
            e
        })?;

        self.fetch_live(result.last_insert_id() as i64).await
    }

    async fn update(
        &self,
        id: i64,
        title: String,
        description: String,
        due_date: Option<DateTime<Utc>>,
        status: Status,
    ) -> Result<Todo, RepositoryError> {
        self.fetch_live(id).await?;

        sqlx::query("UPDATE todos SET title = ?, description = ?, due_date = ?, status = ? WHERE id = ?")
            .bind(&title)
            .bind(&description)
            .bind(due_date)
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(id, error = %e, "database error on update");
                e
            })?;

        self.fetch_live(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.fetch_live(id).await?;

        // `updated_at = updated_at` suppresses the ON UPDATE clause: the
        // soft-delete marks the row without touching anything else.
        sqlx::query(
            "UPDATE todos SET deleted_at = CURRENT_TIMESTAMP(6), updated_at = updated_at WHERE id = ?",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(id, error = %e, "database error on delete");
            e
        })?;

        Ok(())
    }

    async fn list(&self, status: Option<Status>) -> Result<Vec<Todo>, RepositoryError> {
        let todos = match status {
            Some(status) => {
                let query = format!("{SELECT_TODO} WHERE deleted_at IS NULL AND status = ?");
                sqlx::query_as::<_, Todo>(&query)
                    .bind(status.as_str())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!("{SELECT_TODO} WHERE deleted_at IS NULL");
                sqlx::query_as::<_, Todo>(&query).fetch_all(&self.pool).await
            }
        }
        .map_err(|e| {
            error!(error = %e, "database error on list");
            e
        })?;

        Ok(todos)
    }
}
