//! Database connection setup.

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::config::DbConfig;

/// Open a connection pool and verify it with a ping.
///
/// A failure here is fatal at startup: the caller exits before serving any
/// requests.
pub async fn connect(cfg: &DbConfig) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new().connect(&cfg.url()).await?;
    sqlx::query("SELECT 1").execute(&pool).await?;

    info!(
        host = %cfg.host,
        port = %cfg.port,
        database = %cfg.db_name,
        "connected to database"
    );
    Ok(pool)
}
