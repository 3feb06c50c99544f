use core_config::{
    app_info, database::DatabaseConfig, server::ServerConfig, AppInfo, ConfigError, FromEnv,
};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// None means no database is configured; the in-memory store is used
    pub database: Option<DatabaseConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            database: DatabaseConfig::from_env_opt(),
            server: ServerConfig::from_env()?, // Uses defaults: HOST=0.0.0.0, PORT=8080
            environment: Environment::from_env(),
        })
    }
}
