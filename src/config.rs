//! Configuration loading.
//!
//! Everything has a default, so a missing config file is fine. Values come
//! from (lowest to highest priority) built-in defaults, the TOML file, then
//! a couple of environment overrides.

use crate::core::TerminalProfile;
use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Env var naming the config file when `--config` isn't given
pub const CONFIG_ENV: &str = "PORTFOLIO_CONFIG";
pub const DATABASE_URL_ENV: &str = "PORTFOLIO_DATABASE_URL";
pub const PORT_ENV: &str = "PORTFOLIO_PORT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
    pub terminal: TerminalProfile,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed by CORS; `"*"` allows any.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: [
                "http://localhost:5173",
                "http://localhost:5174",
                "http://localhost:5175",
                "http://127.0.0.1:5173",
                "http://127.0.0.1:5174",
                "http://127.0.0.1:5175",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Record store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file path, or `:memory:`.
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_path().display().to_string(),
            max_connections: crate::db::connection::MAX_CONNECTIONS,
        }
    }
}

fn default_database_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".portfolio-terminal")
        .join("portfolio.db")
}

/// Startup seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// TOML fixture with the portfolio records.
    pub fixture: Option<PathBuf>,
    /// Load the fixture on `serve` when the store is empty.
    pub auto_seed: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            fixture: None,
            auto_seed: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for this crate and the HTTP layer (trace, debug, info, warn, error).
    pub level: String,
    /// Emit JSON lines instead of compact text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PortfolioError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&contents).map_err(|e| {
            PortfolioError::Config(format!("{}: {}", path.display(), e.user_message()))
        })
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| PortfolioError::Config(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// `explicit` (the `--config` flag) wins over `PORTFOLIO_CONFIG`; with
    /// neither, defaults are used. Env overrides are applied last.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);

        let mut config = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `PORTFOLIO_DATABASE_URL` / `PORTFOLIO_PORT`.
    ///
    /// Takes a lookup function so tests don't have to touch the process env.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            self.database.url = url;
        }

        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port.parse().map_err(|_| {
                PortfolioError::Config(format!(
                    "{} must be a port number, got '{}'",
                    PORT_ENV, port
                ))
            })?;
        }

        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(PortfolioError::Config("database.url is empty".to_string()));
        }
        if self.database.max_connections == 0 {
            return Err(PortfolioError::Config(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
