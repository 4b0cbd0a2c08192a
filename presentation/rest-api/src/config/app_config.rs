use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Listener and middleware settings. Database settings are read by
/// [`super::database_config::init_database`].
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
