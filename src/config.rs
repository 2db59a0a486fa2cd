//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_ACCESS_TTL_MINUTES, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_GRID_LEVELS,
    DEFAULT_GRID_PROBLEMS_PER_LEVEL, DEFAULT_JWT_ISSUER, DEFAULT_REFRESH_TTL_DAYS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, MAX_GRID_LEVELS,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub grid: GridConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// JWT authentication configuration
///
/// `secret` is mandatory with no fallback: a missing `JWT_SECRET` is a
/// startup error, never a baked-in development default.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_days: i64,
}

/// Problem grid shape used when seeding a new competition
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub levels: i32,
    pub problems_per_level: i32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            grid: GridConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_JWT_ISSUER.to_string()),
            access_ttl_minutes: env::var("ACCESS_TTL_MIN")
                .unwrap_or_else(|_| DEFAULT_ACCESS_TTL_MINUTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ACCESS_TTL_MIN".to_string()))?,
            refresh_ttl_days: env::var("REFRESH_TTL_DAYS")
                .unwrap_or_else(|_| DEFAULT_REFRESH_TTL_DAYS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REFRESH_TTL_DAYS".to_string()))?,
        })
    }
}

impl GridConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let grid = Self {
            levels: env::var("GRID_LEVELS")
                .unwrap_or_else(|_| DEFAULT_GRID_LEVELS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GRID_LEVELS".to_string()))?,
            problems_per_level: env::var("GRID_PROBLEMS_PER_LEVEL")
                .unwrap_or_else(|_| DEFAULT_GRID_PROBLEMS_PER_LEVEL.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GRID_PROBLEMS_PER_LEVEL".to_string()))?,
        };

        grid.validate()?;
        Ok(grid)
    }

    /// Levels are capped at the registration table's check constraint so an
    /// out-of-range level is always refused by the application gate, never
    /// by the storage layer.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_GRID_LEVELS).contains(&self.levels) {
            return Err(ConfigError::InvalidValue("GRID_LEVELS".to_string()));
        }
        if self.problems_per_level < 1 {
            return Err(ConfigError::InvalidValue("GRID_PROBLEMS_PER_LEVEL".to_string()));
        }
        Ok(())
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);

        let grid = GridConfig {
            levels: DEFAULT_GRID_LEVELS,
            problems_per_level: DEFAULT_GRID_PROBLEMS_PER_LEVEL,
        };
        assert_eq!(grid.levels * grid.problems_per_level, 56);
    }

    #[test]
    fn test_grid_levels_capped_at_storage_ceiling() {
        let grid = |levels| GridConfig {
            levels,
            problems_per_level: 8,
        };

        assert!(grid(1).validate().is_ok());
        assert!(grid(8).validate().is_ok());
        assert!(grid(0).validate().is_err());
        assert!(grid(9).validate().is_err());
    }
}
