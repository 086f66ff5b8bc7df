use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use todo_server::config::DbConfig;
use todo_server::repository::{MySqlTodoRepository, SharedStore};
use todo_server::{db, handler};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = DbConfig::from_env();
    let pool = match db::connect(&cfg).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "failed to connect to database");
            std::process::exit(1);
        }
    };

    let store: SharedStore = Arc::new(MySqlTodoRepository::new(pool));

    let addr = "0.0.0.0:8080";
    let listener = TcpListener::bind(addr).await?;
    info!(addr, "starting server");

    axum::serve(listener, handler::app(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server exited");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM; axum then stops accepting new requests
/// and drains in-flight ones.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received, draining in-flight requests");
}
