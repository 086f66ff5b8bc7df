//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe RPC calls as plain data. The core crate builds
//! `RpcRequest` values and parses `RpcResponse` values without ever touching
//! the network — the caller (CLI, tests) is responsible for executing the
//! actual I/O. Every unary RPC is a POST to a method path with a JSON body,
//! so no method field is needed.

/// An RPC call described as plain data.
///
/// Built by `TodoServiceClient::build_*` methods. The caller POSTs `body`
/// to `url` with the given headers and returns the corresponding
/// `RpcResponse`.
#[derive(Debug, Clone)]
pub struct RpcRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The result of executing an `RpcRequest`, passed to
/// `TodoServiceClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct RpcResponse {
    pub status: u16,
    pub body: String,
}
