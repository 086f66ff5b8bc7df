//! Todo RPC service: four unary operations over HTTP backed by MySQL.
//!
//! # Overview
//! `handler::app` builds the axum router; `repository::TodoStore` is the
//! seam between handlers and persistence, with a MySQL implementation for
//! production and an in-memory one for tests. The binary in `main.rs` wires
//! config, logging, and graceful shutdown around `app`.

pub mod config;
pub mod db;
pub mod error;
pub mod handler;
pub mod repository;
pub mod todo;

pub use handler::app;
use repository::SharedStore;
use tokio::net::TcpListener;

/// Serve the RPC router on `listener` until the task is dropped. Used by
/// tests that need a live socket; the binary adds graceful shutdown on top
/// of `app` itself.
pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}
