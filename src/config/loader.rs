use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use std::path::PathBuf;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the default sources
    ///
    /// Search order:
    /// 1. ./config.toml
    /// 2. environment variables
    pub fn load() -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("REBRAND_").split("_").global());

        figment.extract()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("REBRAND_").split("_").global());

        figment.extract()
    }

    /// Validate configuration
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.database.url.is_empty() {
            return Err(ConfigValidationError::MissingDatabaseUrl);
        }

        if config.security.nonces.is_empty() && !config.security.allow_anonymous {
            return Err(ConfigValidationError::NoNoncesRegistered);
        }

        if config.audit.log_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::MissingAuditPath);
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("server port must be greater than 0")]
    InvalidPort,

    #[error("database connection URL is not configured")]
    MissingDatabaseUrl,

    #[error("no request nonces registered and anonymous access is disabled")]
    NoNoncesRegistered,

    #[error("audit log path is not configured")]
    MissingAuditPath,
}

/// Default configuration file path
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}

/// Check whether the configuration file exists
pub fn config_exists() -> bool {
    default_config_path().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::NonceEntry;

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.security.allow_anonymous = true;
        config.server.port = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidPort)
        ));
    }

    #[test]
    fn test_validate_requires_nonces_or_anonymous() {
        let config = AppConfig::default();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::NoNoncesRegistered)
        ));

        let mut config = AppConfig::default();
        config.security.nonces.push(NonceEntry {
            nonce: "abc123".to_string(),
            user_id: 7,
        });
        assert!(ConfigLoader::validate(&config).is_ok());
    }
}
