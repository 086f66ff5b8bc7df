//! Synchronous RPC client core for the todo service.
//!
//! # Overview
//! Builds `RpcRequest` values and parses `RpcResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `TodoServiceClient` is stateless — it holds only `base_url`.
//! - Each unary RPC is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Wire types are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoServiceClient;
pub use error::ApiError;
pub use http::{RpcRequest, RpcResponse};
pub use types::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse, ErrorMessage,
    ListTodosRequest, ListTodosResponse, Todo, TodoStatus, UpdateTodoRequest, UpdateTodoResponse,
};
