use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::errors::WebError;

/// Error observation middleware
///
/// Error conversion happens in `IntoResponse` on the error types themselves;
/// this layer only logs server errors that made it to the wire.
pub async fn error_handler_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    if response.status().is_server_error() {
        error!("{} {} responded {}", method, uri, response.status());
    }

    response
}

/// Fallback handler for unmatched routes
pub async fn handle_not_found() -> impl IntoResponse {
    WebError::not_found("The requested resource was not found").into_response()
}

/// Convenience function to convert any error into an internal WebError
pub fn internal_error<E: std::fmt::Display>(err: E) -> WebError {
    WebError::internal(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    async fn failing_handler() -> Result<&'static str, WebError> {
        Err(WebError::internal("Test error"))
    }

    #[tokio::test]
    async fn test_error_conversion() {
        let app = Router::new()
            .route("/error", get(failing_handler))
            .layer(axum::middleware::from_fn(error_handler_middleware));

        let request = axum::http::Request::builder()
            .uri("/error")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_fallback_not_found() {
        let app = Router::new().fallback(handle_not_found);

        let request = axum::http::Request::builder()
            .uri("/nope")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
