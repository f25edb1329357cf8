use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SurrealDB connection URL
    pub url: String,
    /// Namespace
    pub namespace: String,
    /// Database name
    pub database: String,
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8000".to_string(),
            namespace: "rebrand".to_string(),
            database: "taxonomy".to_string(),
            username: "root".to_string(),
            password: "root".to_string(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Security configuration
///
/// Requests must carry a nonce issued by the hosting environment; the
/// service only verifies it against the registered values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SecurityConfig {
    /// Accepted nonce values, keyed to the acting user id
    pub nonces: Vec<NonceEntry>,
    /// Accept any nonce and attribute actions to user 0 (development only)
    pub allow_anonymous: bool,
}

/// A registered nonce and the user it authenticates
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NonceEntry {
    /// Nonce value expected in the request header
    pub nonce: String,
    /// Acting user id recorded in the audit trail
    pub user_id: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Structured (JSON) log format
    pub structured: bool,
    /// Log file directory; stdout only when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            structured: false,
            log_dir: None,
        }
    }
}

/// Audit trail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Append-only assignment log file
    pub log_path: PathBuf,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("logs/physician-assignments.log"),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Server section
    pub server: ServerConfig,
    /// Database section
    pub database: DatabaseConfig,
    /// Security section
    pub security: SecurityConfig,
    /// Logging section
    pub logging: LoggingConfig,
    /// Audit section
    pub audit: AuditConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert!(!config.security.allow_anonymous);
        assert!(config.logging.log_dir.is_none());
        assert_eq!(
            config.audit.log_path,
            PathBuf::from("logs/physician-assignments.log")
        );
    }
}
