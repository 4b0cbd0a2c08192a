use std::{env, path::Path};

use anyhow::Context;
use persistence::db::{DatabaseConfig, create_mysql_pool, run_migrations};
use sqlx::MySqlPool;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: MySQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: migrations directory (default: "infrastructure/persistence/migrations")
///
/// Migrations are skipped with a warning when the directory does not exist.
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<MySqlPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let max_connections = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok());

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_mysql_pool(&config).await?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    if Path::new(&migrations_path).is_dir() {
        run_migrations(&pool, &migrations_path).await?;
    } else {
        tracing::warn!(path = %migrations_path, "Migrations directory not found, skipping");
    }

    Ok(pool)
}

fn parse_max_connections(raw: Option<String>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}
