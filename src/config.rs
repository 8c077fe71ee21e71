//! Configuration module
//!
//! `AppConfig` is read from a TOML file. Every section and key is optional;
//! anything missing takes its default.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//! shutdown_timeout = 30
//!
//! [database]
//! url = "sqlite://./poi.db?mode=rwc"
//! max_connections = 10
//!
//! [logging]
//! level = "info"
//! json = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::DatabaseConfig;
use crate::shared::InfraError;

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "POI_CONFIG";
/// Env var overriding `[database] url`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            url: defaults.url,
            max_connections: defaults.max_connections,
        }
    }
}

impl From<&DatabaseSection> for DatabaseConfig {
    fn from(section: &DatabaseSection) -> Self {
        DatabaseConfig {
            url: section.url.clone(),
            max_connections: section.max_connections,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
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
    /// Reads `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, InfraError> {
        toml::from_str(raw).map_err(|e| InfraError::Config(e.to_string()))
    }

    /// Applies `DATABASE_URL` from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_database_url(std::env::var(DATABASE_URL_ENV).ok())
    }

    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.database.url = url;
        }
        self
    }
}

/// `$POI_CONFIG`, else `~/.config/poi-service/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("poi-service")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.server.address(), "0.0.0.0:3000");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [server]
            port = 8080

            [database]
            url = "sqlite::memory:"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.database.max_connections, 10);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = AppConfig::from_toml("[server\nport = ").unwrap_err();
        assert!(matches!(err, InfraError::Config(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = AppConfig::load(Path::new("/definitely/not/here/config.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn database_url_override() {
        let cfg = AppConfig::default().with_database_url(Some("sqlite://other.db".into()));
        assert_eq!(cfg.database.url, "sqlite://other.db");

        let cfg = AppConfig::default().with_database_url(Some("  ".into()));
        assert_eq!(cfg.database.url, DatabaseSection::default().url);
    }

    #[test]
    fn section_converts_to_pool_config() {
        let section = DatabaseSection {
            url: "sqlite::memory:".into(),
            max_connections: 1,
        };
        let db = DatabaseConfig::from(&section);
        assert_eq!(db.url, "sqlite::memory:");
        assert_eq!(db.max_connections, 1);
    }
}
