//! Bearer-token authentication middleware
//!
//! Requests to protected routes must carry an `Authorization: Bearer <token>`
//! header. Only the header shape is checked: token verification is the main
//! fill-in point of the scaffold and is left to the consuming project.

use std::sync::Arc;

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use tracing::{debug, warn};

use crate::errors::WebError;

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Whether to require authentication on protected routes
    pub require_auth: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { require_auth: true }
    }
}

/// Authentication context for the current request
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Subject the request acts as
    pub subject: String,
    /// Role attached to the subject
    pub role: String,
    /// Whether this is an authenticated request
    pub is_authenticated: bool,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self {
            subject: "anonymous".to_string(),
            role: "guest".to_string(),
            is_authenticated: false,
        }
    }
}

impl AuthContext {
    /// Create an authenticated context
    pub fn authenticated(subject: String, role: String) -> Self {
        Self {
            subject,
            role,
            is_authenticated: true,
        }
    }

    /// Check if the subject can perform admin operations
    pub fn can_admin(&self) -> bool {
        // TODO: check the role once token claims are verified and a user
        // store provides roles
        self.is_authenticated
    }

    /// Check if the subject can write/modify resources
    pub fn can_write(&self) -> bool {
        // TODO: check the role once token claims are verified and a user
        // store provides roles
        self.is_authenticated
    }

    /// Check if the subject can read resources
    pub fn can_read(&self) -> bool {
        self.is_authenticated
    }
}

/// Bearer token authenticator
///
/// Validates the shape of the `Authorization` header and produces an
/// [`AuthContext`] for downstream handlers.
pub struct BearerAuthenticator {
    config: AuthConfig,
}

impl BearerAuthenticator {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Extract the bearer token from the Authorization header
    fn extract_token(&self, headers: &HeaderMap) -> Result<String, WebError> {
        let auth_header = headers
            .get("Authorization")
            .ok_or_else(|| WebError::unauthorized("Missing authorization header"))?
            .to_str()
            .map_err(|_| WebError::unauthorized("Invalid authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| WebError::unauthorized("Authorization header must use the Bearer scheme"))?;

        if token.trim().is_empty() {
            return Err(WebError::unauthorized("Empty bearer token"));
        }

        Ok(token.to_string())
    }

    /// Authenticate a request from its headers
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthContext, WebError> {
        if !self.config.require_auth {
            return Ok(AuthContext::default());
        }

        let _token = self.extract_token(headers).map_err(|err| {
            warn!("authentication failed: {}", err);
            err
        })?;

        // TODO: verify the token signature and expiry, then derive subject
        // and role from its claims instead of these placeholders
        debug!("bearer token accepted without verification");
        Ok(AuthContext::authenticated(
            "bearer".to_string(),
            "user".to_string(),
        ))
    }
}

/// Authentication middleware
///
/// Expects an `Arc<BearerAuthenticator>` in the request extensions (added as
/// an `Extension` layer during router assembly) and inserts the resulting
/// [`AuthContext`] for handlers to extract.
pub async fn auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let authenticator = request
        .extensions()
        .get::<Arc<BearerAuthenticator>>()
        .cloned()
        .ok_or_else(|| WebError::internal("Authenticator not configured"))?;

    let auth_context = authenticator.authenticate(&headers)?;
    request.extensions_mut().insert(auth_context);

    Ok(next.run(request).await)
}

/// Require write permissions (to be used as a guard inside handlers)
pub fn require_write(auth_context: &AuthContext) -> Result<(), WebError> {
    if auth_context.can_write() {
        Ok(())
    } else {
        Err(WebError::forbidden("Write privileges required"))
    }
}

/// Require admin permissions
pub fn require_admin(auth_context: &AuthContext) -> Result<(), WebError> {
    if auth_context.can_admin() {
        Ok(())
    } else {
        Err(WebError::forbidden("Admin privileges required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_accepted() {
        let authenticator = BearerAuthenticator::new(AuthConfig::default());
        let context = authenticator
            .authenticate(&headers_with_auth("Bearer any-opaque-token"))
            .unwrap();
        assert!(context.is_authenticated);
        assert!(context.can_write());
    }

    #[test]
    fn test_missing_header_rejected() {
        let authenticator = BearerAuthenticator::new(AuthConfig::default());
        let result = authenticator.authenticate(&HeaderMap::new());
        assert!(matches!(result, Err(WebError::Unauthorized { .. })));
    }

    #[test]
    fn test_wrong_scheme_rejected() {
        let authenticator = BearerAuthenticator::new(AuthConfig::default());
        let result = authenticator.authenticate(&headers_with_auth("Basic dXNlcjpwYXNz"));
        assert!(matches!(result, Err(WebError::Unauthorized { .. })));
    }

    #[test]
    fn test_empty_token_rejected() {
        let authenticator = BearerAuthenticator::new(AuthConfig::default());
        let result = authenticator.authenticate(&headers_with_auth("Bearer "));
        assert!(matches!(result, Err(WebError::Unauthorized { .. })));
    }

    #[test]
    fn test_auth_disabled_allows_anonymous() {
        let authenticator = BearerAuthenticator::new(AuthConfig { require_auth: false });
        let context = authenticator.authenticate(&HeaderMap::new()).unwrap();
        assert!(!context.is_authenticated);
        assert_eq!(context.subject, "anonymous");
    }

    #[test]
    fn test_role_guards() {
        let authenticated = AuthContext::authenticated("bearer".to_string(), "user".to_string());
        assert!(require_write(&authenticated).is_ok());
        assert!(require_admin(&authenticated).is_ok());

        let anonymous = AuthContext::default();
        assert!(require_write(&anonymous).is_err());
        assert!(require_admin(&anonymous).is_err());
    }
}
