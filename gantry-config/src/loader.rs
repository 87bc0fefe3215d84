//! Configuration loading and environment variable handling

use std::path::Path;

use crate::domains::GantryConfig;
use crate::error::{ConfigError, ConfigResult};

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with the default prefix
    pub fn new() -> Self {
        Self {
            prefix: "GANTRY".to_string(),
        }
    }

    /// Create a new config loader with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<GantryConfig> {
        let content = std::fs::read_to_string(path)?;
        let mut config: GantryConfig = serde_yaml::from_str(&content)?;

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<GantryConfig> {
        let mut config = GantryConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<GantryConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut GantryConfig) -> ConfigResult<()> {
        self.apply_server_overrides(&mut config.server)?;
        self.apply_logging_overrides(&mut config.logging)?;
        Ok(())
    }

    /// Apply server config overrides
    fn apply_server_overrides(
        &self,
        config: &mut crate::domains::server::ServerConfig,
    ) -> ConfigResult<()> {
        if let Ok(bind) = self.get_env_var("SERVER_BIND_ADDRESS") {
            config.bind_address = bind;
        }

        if let Ok(port) = self.get_env_var("SERVER_PORT") {
            config.port = port
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid SERVER_PORT: {}", e)))?;
        }

        if let Ok(prefix) = self.get_env_var("SERVER_API_PREFIX") {
            config.api_prefix = prefix;
        }

        if let Ok(require_auth) = self.get_env_var("REQUIRE_AUTH") {
            config.auth.require_auth = require_auth
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid REQUIRE_AUTH: {}", e)))?;
        }

        Ok(())
    }

    /// Apply logging config overrides
    fn apply_logging_overrides(
        &self,
        config: &mut crate::domains::logging::LoggingConfig,
    ) -> ConfigResult<()> {
        use std::str::FromStr;

        if let Ok(log_level) = self.get_env_var("LOG_LEVEL") {
            config.level = crate::domains::logging::LogLevel::from_str(&log_level)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_LEVEL: {}", log_level)))?;
        }

        if let Ok(format) = self.get_env_var("LOG_FORMAT") {
            config.format = crate::domains::logging::LogFormat::from_str(&format)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_FORMAT: {}", format)))?;
        }

        Ok(())
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(["GANTRY_SERVER_PORT", "GANTRY_LOG_LEVEL"], || {
            let config = ConfigLoader::new().from_env().unwrap();
            assert_eq!(config.server.port, 8080);
        });
    }

    #[test]
    fn test_env_overrides() {
        temp_env::with_vars(
            [
                ("GANTRY_SERVER_PORT", Some("9999")),
                ("GANTRY_LOG_LEVEL", Some("debug")),
                ("GANTRY_REQUIRE_AUTH", Some("false")),
            ],
            || {
                let config = ConfigLoader::new().from_env().unwrap();
                assert_eq!(config.server.port, 9999);
                assert_eq!(
                    config.logging.level,
                    crate::domains::logging::LogLevel::Debug
                );
                assert!(!config.server.auth.require_auth);
            },
        );
    }

    #[test]
    fn test_invalid_env_value_is_rejected() {
        temp_env::with_var("GANTRY_SERVER_PORT", Some("not-a-port"), || {
            let result = ConfigLoader::new().from_env();
            assert!(matches!(result, Err(ConfigError::EnvError(_))));
        });
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server:\n  bind_address: 0.0.0.0\n  port: 3000\nlogging:\n  level: warn\n"
        )
        .unwrap();

        let config = ConfigLoader::new().from_file(file.path()).unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, crate::domains::logging::LogLevel::Warn);
    }

    #[test]
    fn test_invalid_file_config_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  api_prefix: no-slash\n").unwrap();

        let result = ConfigLoader::new().from_file(file.path());
        assert!(result.is_err());
    }
}
