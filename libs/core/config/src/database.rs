use crate::{env_required, ConfigError, FromEnv};
use std::env;

/// Database configuration
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    pub fn new(url: String) -> Self {
        Self { url }
    }

    /// Load from DATABASE_URL, returning None when it is not set.
    ///
    /// For services that can run against an in-memory store when no
    /// database is configured.
    pub fn from_env_opt() -> Option<Self> {
        env::var("DATABASE_URL").ok().map(Self::new)
    }
}

impl FromEnv for DatabaseConfig {
    /// Requires DATABASE_URL to be set (no default)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("DATABASE_URL")?,
        })
    }
}
