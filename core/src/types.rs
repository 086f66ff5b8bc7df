//! Wire message types for the todo RPC service.
//!
//! # Design
//! These types mirror the server's request/response schema but are defined
//! independently so the client carries no server dependency. Timestamps are
//! RFC 3339 strings on the wire (chrono serde); `due_date` is omitted
//! entirely when unset. Integration tests catch any schema drift between the
//! two crates.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Wire status enum, serialized under its proto-style names.
///
/// `Unspecified` is the wire default: it stands in for a missing field and
/// for any tag the receiver does not recognize. The server collapses it to
/// `pending` on writes and treats it as "no filter" on `ListTodos`, so an
/// `UNSPECIFIED` sent in never comes back out — responses always carry one
/// of the two concrete values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TodoStatus {
    #[default]
    #[serde(rename = "TODO_STATUS_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "TODO_STATUS_PENDING")]
    Pending,
    #[serde(rename = "TODO_STATUS_COMPLETED")]
    Completed,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Unspecified => "TODO_STATUS_UNSPECIFIED",
            TodoStatus::Pending => "TODO_STATUS_PENDING",
            TodoStatus::Completed => "TODO_STATUS_COMPLETED",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Hand-written so unknown tags fall back to `Unspecified` instead of failing
// the whole message, matching proto enum semantics.
impl<'de> Deserialize<'de> for TodoStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "TODO_STATUS_PENDING" => TodoStatus::Pending,
            "TODO_STATUS_COMPLETED" => TodoStatus::Completed,
            // UNSPECIFIED and any unrecognized tag
            _ => TodoStatus::Unspecified,
        })
    }
}

/// A single todo item as it appears in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: TodoStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoResponse {
    pub todo: Todo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: TodoStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoResponse {
    pub todo: Todo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTodoRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTodoResponse {}

/// `Unspecified` means "no filter" here, not a value to match against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTodosRequest {
    #[serde(default)]
    pub status: TodoStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTodosResponse {
    #[serde(default)]
    pub todos: Vec<Todo>,
}

/// Error envelope returned by the server for failed RPCs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn status_serializes_to_proto_names() {
        assert_eq!(
            serde_json::to_value(TodoStatus::Pending).unwrap(),
            "TODO_STATUS_PENDING"
        );
        assert_eq!(
            serde_json::to_value(TodoStatus::Completed).unwrap(),
            "TODO_STATUS_COMPLETED"
        );
        assert_eq!(
            serde_json::to_value(TodoStatus::Unspecified).unwrap(),
            "TODO_STATUS_UNSPECIFIED"
        );
    }

    #[test]
    fn status_unknown_tag_deserializes_to_unspecified() {
        let status: TodoStatus = serde_json::from_str(r#""TODO_STATUS_ARCHIVED""#).unwrap();
        assert_eq!(status, TodoStatus::Unspecified);
    }

    #[test]
    fn status_missing_field_defaults_to_unspecified() {
        let req: ListTodosRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.status, TodoStatus::Unspecified);
    }

    #[test]
    fn todo_without_due_date_omits_the_field() {
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            description: String::new(),
            due_date: None,
            status: TodoStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert!(json.get("due_date").is_none());
        assert_eq!(json["status"], "TODO_STATUS_PENDING");
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 7,
            title: "Roundtrip".to_string(),
            description: "with due date".to_string(),
            due_date: Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()),
            status: TodoStatus::Completed,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 13, 0, 0).unwrap(),
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn create_request_rejects_missing_title() {
        let result: Result<CreateTodoRequest, _> = serde_json::from_str(r#"{"description":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_request_defaults_optional_fields() {
        let req: CreateTodoRequest = serde_json::from_str(r#"{"title":"Bare"}"#).unwrap();
        assert_eq!(req.title, "Bare");
        assert!(req.description.is_empty());
        assert!(req.due_date.is_none());
    }
}
