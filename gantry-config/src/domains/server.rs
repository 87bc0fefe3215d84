//! Server configuration for the REST API

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::validation::{validate_positive, validate_required_string, validate_url, Validatable};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// API path prefix
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Whether API routes require an Authorization header
    #[serde(default = "default_true")]
    pub require_auth: bool,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins
    #[serde(default = "default_cors_origins")]
    pub allowed_origins: Vec<String>,

    /// Whether to allow credentials
    #[serde(default)]
    pub allow_credentials: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            api_prefix: default_api_prefix(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { require_auth: true }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_cors_origins(),
            allow_credentials: false,
        }
    }
}

impl Validatable for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.bind_address, "bind_address", self.domain_name())?;
        validate_positive(self.port, "port", self.domain_name())?;
        validate_required_string(&self.api_prefix, "api_prefix", self.domain_name())?;

        if !self.api_prefix.starts_with('/') {
            return Err(self.validation_error("api_prefix must start with '/'"));
        }

        self.cors.validate()?;

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "server"
    }
}

impl Validatable for CorsConfig {
    fn validate(&self) -> ConfigResult<()> {
        for origin in &self.allowed_origins {
            if origin != "*" {
                validate_url(origin, "allowed_origins", self.domain_name())?;
            }
        }

        if self.allowed_origins.contains(&"*".to_string()) && self.allow_credentials {
            return Err(self.validation_error(
                "wildcard origin cannot be combined with allow_credentials",
            ));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "server.cors"
    }
}

// Default value functions
fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

fn default_true() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_prefix, "/api/v1");
        assert!(config.auth.require_auth);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_api_prefix() {
        let config = ServerConfig {
            api_prefix: "api/v1".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cors_validation() {
        let mut cors = CorsConfig::default();
        assert!(cors.validate().is_ok());

        cors.allowed_origins = vec!["*".to_string()];
        cors.allow_credentials = true;
        assert!(cors.validate().is_err());

        cors.allowed_origins = vec!["not a url".to_string()];
        cors.allow_credentials = false;
        assert!(cors.validate().is_err());
    }
}
