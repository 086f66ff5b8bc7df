//! RPC handlers: boundary translation between wire messages and the store.
//!
//! Each of the four unary RPCs follows the same shape: log the identifying
//! input, convert wire fields to internal ones, invoke the store, convert
//! the resulting entity back to a wire message, and let any store failure
//! propagate unchanged as the RPC failure.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use todo_core as wire;
use tracing::{error, info};

use crate::error::RepositoryError;
use crate::repository::SharedStore;
use crate::todo::{Status, Todo};

/// Router exposing the four unary RPCs of `todo.v1.TodoService`.
pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/todo.v1.TodoService/CreateTodo", post(create_todo))
        .route("/todo.v1.TodoService/UpdateTodo", post(update_todo))
        .route("/todo.v1.TodoService/DeleteTodo", post(delete_todo))
        .route("/todo.v1.TodoService/ListTodos", post(list_todos))
        .with_state(store)
}

async fn create_todo(
    State(store): State<SharedStore>,
    Json(req): Json<wire::CreateTodoRequest>,
) -> Result<Json<wire::CreateTodoResponse>, RepositoryError> {
    info!(title = %req.title, "CreateTodo called");

    let todo = store
        .create(req.title, req.description, req.due_date)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to create todo");
            e
        })?;

    info!(id = todo.id, "todo created");
    Ok(Json(wire::CreateTodoResponse { todo: to_wire(todo) }))
}

async fn update_todo(
    State(store): State<SharedStore>,
    Json(req): Json<wire::UpdateTodoRequest>,
) -> Result<Json<wire::UpdateTodoResponse>, RepositoryError> {
    info!(id = req.id, "UpdateTodo called");

    let todo = store
        .update(
            req.id,
            req.title,
            req.description,
            req.due_date,
            status_from_wire(req.status),
        )
        .await
        .map_err(|e| {
            error!(id = req.id, error = %e, "failed to update todo");
            e
        })?;

    info!(id = todo.id, "todo updated");
    Ok(Json(wire::UpdateTodoResponse { todo: to_wire(todo) }))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    Json(req): Json<wire::DeleteTodoRequest>,
) -> Result<Json<wire::DeleteTodoResponse>, RepositoryError> {
    info!(id = req.id, "DeleteTodo called");

    store.delete(req.id).await.map_err(|e| {
        error!(id = req.id, error = %e, "failed to delete todo");
        e
    })?;

    info!(id = req.id, "todo deleted");
    Ok(Json(wire::DeleteTodoResponse {}))
}

async fn list_todos(
    State(store): State<SharedStore>,
    Json(req): Json<wire::ListTodosRequest>,
) -> Result<Json<wire::ListTodosResponse>, RepositoryError> {
    info!("ListTodos called");

    let todos = store.list(filter_from_wire(req.status)).await.map_err(|e| {
        error!(error = %e, "failed to list todos");
        e
    })?;

    info!(count = todos.len(), "ListTodos completed");
    Ok(Json(wire::ListTodosResponse {
        todos: todos.into_iter().map(to_wire).collect(),
    }))
}

fn to_wire(todo: Todo) -> wire::Todo {
    wire::Todo {
        id: todo.id,
        title: todo.title,
        description: todo.description.unwrap_or_default(),
        due_date: todo.due_date,
        status: status_to_wire(todo.status),
        created_at: todo.created_at,
        updated_at: todo.updated_at,
    }
}

fn status_to_wire(status: Status) -> wire::TodoStatus {
    match status {
        Status::Pending => wire::TodoStatus::Pending,
        Status::Completed => wire::TodoStatus::Completed,
    }
}

/// Wire status for a write. `UNSPECIFIED` — the wire default, which also
/// absorbs unrecognized tags — deliberately collapses to `pending`.
fn status_from_wire(status: wire::TodoStatus) -> Status {
    match status {
        wire::TodoStatus::Pending => Status::Pending,
        wire::TodoStatus::Completed => Status::Completed,
        wire::TodoStatus::Unspecified => Status::Pending,
    }
}

/// Wire status for `ListTodos`, where `UNSPECIFIED` means "no filter".
fn filter_from_wire(status: wire::TodoStatus) -> Option<Status> {
    match status {
        wire::TodoStatus::Pending => Some(Status::Pending),
        wire::TodoStatus::Completed => Some(Status::Completed),
        wire::TodoStatus::Unspecified => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn status_pending_roundtrips_through_wire() {
        let internal = status_from_wire(wire::TodoStatus::Pending);
        assert_eq!(status_to_wire(internal), wire::TodoStatus::Pending);
    }

    #[test]
    fn status_completed_roundtrips_through_wire() {
        let internal = status_from_wire(wire::TodoStatus::Completed);
        assert_eq!(status_to_wire(internal), wire::TodoStatus::Completed);
    }

    // The round-trip is lossy on purpose: UNSPECIFIED defaults to pending on
    // the way in, and comes back out as PENDING, never UNSPECIFIED.
    #[test]
    fn status_unspecified_comes_back_as_pending() {
        let internal = status_from_wire(wire::TodoStatus::Unspecified);
        assert_eq!(internal, Status::Pending);
        assert_eq!(status_to_wire(internal), wire::TodoStatus::Pending);
    }

    #[test]
    fn unspecified_filter_means_no_filter() {
        assert_eq!(filter_from_wire(wire::TodoStatus::Unspecified), None);
        assert_eq!(
            filter_from_wire(wire::TodoStatus::Completed),
            Some(Status::Completed)
        );
    }

    #[test]
    fn to_wire_maps_optional_fields() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let todo = Todo {
            id: 3,
            title: "Buy milk".to_string(),
            description: None,
            due_date: None,
            status: Status::Pending,
            created_at: created,
            updated_at: created,
            deleted_at: None,
        };
        let wire_todo = to_wire(todo);
        assert_eq!(wire_todo.description, "");
        assert!(wire_todo.due_date.is_none());
        assert_eq!(wire_todo.status, wire::TodoStatus::Pending);
    }
}
