//! Domain-specific configuration modules

pub mod logging;
pub mod server;

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::validation::Validatable;

/// Top-level Gantry configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GantryConfig {
    /// Server configuration
    pub server: server::ServerConfig,

    /// Logging configuration
    pub logging: logging::LoggingConfig,
}

impl GantryConfig {
    /// Validate every configuration domain
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.server.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GantryConfig::default();
        assert!(config.validate_all().is_ok());
    }
}
