pub mod repository;

use std::str::FromStr;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::error::AppError;

const CREATE_COURSE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS course_db (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(255) NOT NULL,
        description TEXT
    )
"#;

/// Hands out database connections, one per request.
///
/// A connection returned by [`ConnectionProvider::acquire`] goes back to the
/// pool when it is dropped, so every exit path of a handler releases it,
/// including `?` returns.
#[derive(Clone, Debug)]
pub struct ConnectionProvider {
    pool: SqlitePool,
}

impl ConnectionProvider {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await?;

        info!(
            "connected to {} (max_connections: {})",
            config.url, config.max_connections
        );

        Ok(Self { pool })
    }

    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, AppError> {
        Ok(self.pool.acquire().await?)
    }

    /// Creates the course table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        let mut conn = self.acquire().await?;
        sqlx::query(CREATE_COURSE_TABLE).execute(&mut *conn).await?;
        info!("course table ready");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.acquire().await?;
        sqlx::query("select 1").execute(&mut *conn).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
