pub mod auth;
pub mod cors;
pub mod error_handler;
pub mod request_id;

// Re-export middleware entry points
pub use auth::{
    auth_middleware, require_admin, require_write, AuthConfig, AuthContext, BearerAuthenticator,
};
pub use cors::{cors_layer, cors_layer_with_config, CorsConfig};
pub use error_handler::{error_handler_middleware, handle_not_found, internal_error};
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
