//! Stateless request builder and response parser for the todo RPC service.
//!
//! # Design
//! `TodoServiceClient` holds only a `base_url` and carries no mutable state
//! between calls. Each unary RPC is split into a `build_*` method that
//! produces an `RpcRequest` and a `parse_*` method that consumes an
//! `RpcResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{RpcRequest, RpcResponse};
use crate::types::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse,
    ListTodosRequest, ListTodosResponse, Todo, UpdateTodoRequest, UpdateTodoResponse,
};

const SERVICE_PATH: &str = "todo.v1.TodoService";

/// Synchronous, stateless client for the todo RPC service.
///
/// Builds `RpcRequest` values and parses `RpcResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoServiceClient {
    base_url: String,
}

impl TodoServiceClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn build(&self, method: &str, message: &impl serde::Serialize) -> Result<RpcRequest, ApiError> {
        let body =
            serde_json::to_string(message).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(RpcRequest {
            url: format!("{}/{}/{}", self.base_url, SERVICE_PATH, method),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        })
    }

    pub fn build_create_todo(&self, req: &CreateTodoRequest) -> Result<RpcRequest, ApiError> {
        self.build("CreateTodo", req)
    }

    pub fn build_update_todo(&self, req: &UpdateTodoRequest) -> Result<RpcRequest, ApiError> {
        self.build("UpdateTodo", req)
    }

    pub fn build_delete_todo(&self, req: &DeleteTodoRequest) -> Result<RpcRequest, ApiError> {
        self.build("DeleteTodo", req)
    }

    pub fn build_list_todos(&self, req: &ListTodosRequest) -> Result<RpcRequest, ApiError> {
        self.build("ListTodos", req)
    }

    pub fn parse_create_todo(&self, response: RpcResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        let msg: CreateTodoResponse = decode(&response.body)?;
        Ok(msg.todo)
    }

    pub fn parse_update_todo(&self, response: RpcResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        let msg: UpdateTodoResponse = decode(&response.body)?;
        Ok(msg.todo)
    }

    pub fn parse_delete_todo(&self, response: RpcResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        let _: DeleteTodoResponse = decode(&response.body)?;
        Ok(())
    }

    pub fn parse_list_todos(&self, response: RpcResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response)?;
        let msg: ListTodosResponse = decode(&response.body)?;
        Ok(msg.todos)
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-200 status codes to the appropriate `ApiError` variant.
fn check_status(response: &RpcResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::types::TodoStatus;

    use super::*;

    fn client() -> TodoServiceClient {
        TodoServiceClient::new("http://localhost:8080")
    }

    fn ok(body: &str) -> RpcResponse {
        RpcResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    const TODO_BODY: &str = r#"{
        "id": 1,
        "title": "Buy milk",
        "description": "",
        "status": "TODO_STATUS_PENDING",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }"#;

    #[test]
    fn build_create_todo_produces_correct_request() {
        let req = client()
            .build_create_todo(&CreateTodoRequest {
                title: "Buy milk".to_string(),
                description: String::new(),
                due_date: None,
            })
            .unwrap();
        assert_eq!(req.url, "http://localhost:8080/todo.v1.TodoService/CreateTodo");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert!(body.get("due_date").is_none());
    }

    #[test]
    fn build_update_todo_carries_status_tag() {
        let req = client()
            .build_update_todo(&UpdateTodoRequest {
                id: 3,
                title: "Buy milk".to_string(),
                description: "2% milk".to_string(),
                due_date: None,
                status: TodoStatus::Completed,
            })
            .unwrap();
        assert_eq!(req.url, "http://localhost:8080/todo.v1.TodoService/UpdateTodo");
        let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(body["id"], 3);
        assert_eq!(body["status"], "TODO_STATUS_COMPLETED");
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(&DeleteTodoRequest { id: 9 }).unwrap();
        assert_eq!(req.url, "http://localhost:8080/todo.v1.TodoService/DeleteTodo");
        let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(body["id"], 9);
    }

    #[test]
    fn build_list_todos_defaults_to_no_filter() {
        let req = client().build_list_todos(&ListTodosRequest::default()).unwrap();
        assert_eq!(req.url, "http://localhost:8080/todo.v1.TodoService/ListTodos");
        let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(body["status"], "TODO_STATUS_UNSPECIFIED");
    }

    #[test]
    fn parse_create_todo_unwraps_envelope() {
        let todo = client()
            .parse_create_todo(ok(&format!(r#"{{"todo":{TODO_BODY}}}"#)))
            .unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.status, TodoStatus::Pending);
    }

    #[test]
    fn parse_update_todo_not_found() {
        let response = RpcResponse {
            status: 404,
            body: r#"{"code":"not_found","message":"todo 5 not found"}"#.to_string(),
        };
        let err = client().parse_update_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_todo_success() {
        assert!(client().parse_delete_todo(ok("{}")).is_ok());
    }

    #[test]
    fn parse_delete_todo_not_found() {
        let response = RpcResponse {
            status: 404,
            body: String::new(),
        };
        let err = client().parse_delete_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_list_todos_success() {
        let todos = client()
            .parse_list_todos(ok(&format!(r#"{{"todos":[{TODO_BODY}]}}"#)))
            .unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Buy milk");
    }

    #[test]
    fn parse_list_todos_empty_message() {
        let todos = client().parse_list_todos(ok("{}")).unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn parse_create_todo_server_error() {
        let response = RpcResponse {
            status: 500,
            body: r#"{"code":"internal","message":"database error"}"#.to_string(),
        };
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_create_todo_bad_json() {
        let err = client().parse_create_todo(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoServiceClient::new("http://localhost:8080/");
        let req = client.build_list_todos(&ListTodosRequest::default()).unwrap();
        assert_eq!(req.url, "http://localhost:8080/todo.v1.TodoService/ListTodos");
    }
}
