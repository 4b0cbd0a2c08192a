use sqlx::{MySqlPool, mysql::MySqlPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error: {0}")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migration_error: {0}")]
    MigrationError(String),
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

/// Creates a MySQL connection pool
pub async fn create_mysql_pool(config: &DatabaseConfig) -> Result<MySqlPool, DatabaseError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(DatabaseError::ConnectionError)?;

    tracing::info!(
        max_connections = config.max_connections,
        "MySQL connection pool ready"
    );
    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &MySqlPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        return Err(DatabaseError::MigrationError(format!(
            "migrations directory not found: {}",
            migrations_path
        )));
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    tracing::info!(path = migrations_path, "Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_pool_defaults() {
        let config = DatabaseConfig::new("mysql://localhost/golumn".to_string());

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_override_max_connections() {
        let config =
            DatabaseConfig::new("mysql://localhost/golumn".to_string()).with_max_connections(12);

        assert_eq!(config.max_connections, 12);
    }

    #[tokio::test]
    async fn should_reject_missing_migrations_directory() {
        let pool = MySqlPoolOptions::new()
            .connect_lazy("mysql://localhost/golumn")
            .unwrap();

        let result = run_migrations(&pool, "/definitely/not/here").await;

        assert!(matches!(result, Err(DatabaseError::MigrationError(_))));
    }
}
