//! Storage abstraction for todo rows.
//!
//! `TodoStore` is the seam between the RPC handlers and persistence. The
//! production implementation runs against MySQL; an in-memory implementation
//! backs the integration tests. Each operation is a single-row
//! lookup-then-write or a filtered scan — no transactions span rows, no
//! retries, no caching.

pub mod memory;
pub mod mysql;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::RepositoryError;
use crate::todo::{Status, Todo};

pub use memory::MemoryTodoRepository;
pub use mysql::MySqlTodoRepository;

/// The store handlers share, behind a trait object.
pub type SharedStore = Arc<dyn TodoStore>;

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert a new row with `status=pending` and no `deleted_at`, returning
    /// the fully populated record (generated id, store-set timestamps).
    /// Empty titles and descriptions are stored as given.
    async fn create(
        &self,
        title: String,
        description: String,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Todo, RepositoryError>;

    /// Overwrite every mutable field of the row unconditionally — a full
    /// replace, not a merge. Callers must resend unchanged fields; an absent
    /// `due_date` clears the stored one. Fails with `NotFound` if the id is
    /// absent or soft-deleted.
    async fn update(
        &self,
        id: i64,
        title: String,
        description: String,
        due_date: Option<DateTime<Utc>>,
        status: Status,
    ) -> Result<Todo, RepositoryError>;

    /// Soft-delete: set `deleted_at` to now, leaving the row otherwise
    /// unchanged. Fails with `NotFound` if the id is absent or already
    /// soft-deleted. There is no undelete.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// All rows with `deleted_at` unset, optionally filtered by exact
    /// status. Order is the store's default — not a contract.
    async fn list(&self, status: Option<Status>) -> Result<Vec<Todo>, RepositoryError>;
}
